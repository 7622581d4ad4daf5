//! Site description and its device membership.

use serde::{Deserialize, Serialize};

/// An addressable unit at a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
}

impl Device {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// A named collection of devices identified by a site id.
///
/// `devices` is the authoritative membership set for the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub id: String,
    pub name: String,
    pub devices: Vec<Device>,
}

impl SiteInfo {
    /// First device whose id matches, in listing order.
    pub fn device(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|device| device.id == id)
    }

    /// Whether any device at the site has the given id.
    pub fn has_device(&self, id: &str) -> bool {
        self.devices.iter().any(|device| device.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteInfo {
        SiteInfo {
            id: "norwich-pear-tree".into(),
            name: "Norwich Pear Tree".into(),
            devices: vec![
                Device::new("111183e7-fb90-436b-9951-63392b36bdd2", "Battery 1"),
                Device::new("86b5c819-6a6c-4978-8c51-a2d810bb9318", "Battery 2"),
                Device::new("86b5c819-6a6c-4978-8c51-a2d810bb9318", "Battery 2 (duplicate)"),
            ],
        }
    }

    #[test]
    fn device_lookup_returns_first_match() {
        let site = site();
        let device = site.device("86b5c819-6a6c-4978-8c51-a2d810bb9318").unwrap();
        assert_eq!(device.name, "Battery 2");
    }

    #[test]
    fn membership_check() {
        let site = site();
        assert!(site.has_device("111183e7-fb90-436b-9951-63392b36bdd2"));
        assert!(!site.has_device("unknown"));
        assert!(site.device("unknown").is_none());
    }

    #[test]
    fn deserializes_api_payload() {
        let payload = r#"{
            "id": "norwich-pear-tree",
            "name": "Norwich Pear Tree",
            "devices": [{"id": "111183e7", "name": "Battery 1"}]
        }"#;
        let site: SiteInfo = serde_json::from_str(payload).unwrap();

        assert_eq!(site.devices.len(), 1);
        assert_eq!(site.devices[0], Device::new("111183e7", "Battery 1"));
    }
}
