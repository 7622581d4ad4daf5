//! Conversions from external infrastructure errors into domain errors.

use outagesync_domain::OutageSyncError;
use reqwest::header::InvalidHeaderValue;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub OutageSyncError);

impl From<InfraError> for OutageSyncError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<OutageSyncError> for InfraError {
    fn from(value: OutageSyncError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoOutageSyncError {
    fn into_outagesync(self) -> OutageSyncError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → OutageSyncError */
/* -------------------------------------------------------------------------- */

impl IntoOutageSyncError for HttpError {
    fn into_outagesync(self) -> OutageSyncError {
        if self.is_decode() {
            return OutageSyncError::Decode(format!("failed to decode HTTP body: {self}"));
        }
        if self.is_builder() {
            return OutageSyncError::InvalidInput(format!("invalid HTTP request: {self}"));
        }
        if self.is_timeout() {
            return OutageSyncError::Network(format!("HTTP request timed out: {self}"));
        }
        if self.is_connect() {
            return OutageSyncError::Network(format!("HTTP connection failed: {self}"));
        }
        OutageSyncError::Network(format!("HTTP error: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_outagesync())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → OutageSyncError */
/* -------------------------------------------------------------------------- */

impl IntoOutageSyncError for serde_json::Error {
    fn into_outagesync(self) -> OutageSyncError {
        OutageSyncError::Decode(format!("invalid JSON response: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_outagesync())
    }
}

/* -------------------------------------------------------------------------- */
/* config parsing errors → OutageSyncError */
/* -------------------------------------------------------------------------- */

impl IntoOutageSyncError for toml::de::Error {
    fn into_outagesync(self) -> OutageSyncError {
        OutageSyncError::Config(format!("Invalid TOML format: {self}"))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        InfraError(value.into_outagesync())
    }
}

impl IntoOutageSyncError for std::io::Error {
    fn into_outagesync(self) -> OutageSyncError {
        OutageSyncError::Config(format!("Failed to read config file: {self}"))
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_outagesync())
    }
}

impl IntoOutageSyncError for url::ParseError {
    fn into_outagesync(self) -> OutageSyncError {
        OutageSyncError::Config(format!("Invalid URL: {self}"))
    }
}

impl From<url::ParseError> for InfraError {
    fn from(value: url::ParseError) -> Self {
        InfraError(value.into_outagesync())
    }
}

impl IntoOutageSyncError for InvalidHeaderValue {
    fn into_outagesync(self) -> OutageSyncError {
        OutageSyncError::Config("API key is not a valid HTTP header value".to_string())
    }
}

impl From<InvalidHeaderValue> for InfraError {
    fn from(value: InvalidHeaderValue) -> Self {
        InfraError(value.into_outagesync())
    }
}
