//! Integration tests for `ApiClient` against a WireMock server
//!
//! **Coverage:**
//! - Endpoint paths, methods and the `x-api-key` header
//! - POST body encoding (absent names omitted)
//! - Retry behaviour surfaced through the client
//! - End-to-end sync run: fetch → filter → enrich → submit

use std::sync::Arc;

use chrono::{DateTime, Utc};
use outagesync_core::OutageSyncService;
use outagesync_domain::{parse_timestamp, Device, Outage, OutageSyncError, RetryConfig};
use outagesync_infra::api::USER_AGENT;
use outagesync_infra::{ApiClient, ApiClientConfig};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-api-key-7f3a9c";
const SITE_ID: &str = "norwich-pear-tree";

// ============================================================================
// Test Helpers
// ============================================================================

fn client_for(server: &MockServer) -> ApiClient {
    client_with_retry(server, RetryConfig::default())
}

fn client_with_retry(server: &MockServer, retry: RetryConfig) -> ApiClient {
    let config = ApiClientConfig::new(API_KEY).with_base_url(server.uri()).with_retry(retry);
    ApiClient::new(config).expect("api client should build")
}

fn threshold() -> DateTime<Utc> {
    parse_timestamp("2022-01-01T00:00:00.000Z").expect("valid threshold")
}

fn outages_payload() -> serde_json::Value {
    json!([
        {
            "id": "002b28fc-283c-47ec-9af2-ea287336dc1b",
            "begin": "2021-07-26T17:09:31.036Z",
            "end": "2021-08-29T00:37:42.253Z"
        },
        {
            "id": "002b28fc-283c-47ec-9af2-ea287336dc1b",
            "begin": "2022-05-23T12:21:27.377Z",
            "end": "2022-11-13T02:16:38.905Z"
        },
        {
            "id": "04ccad00-eb8d-4045-8994-b569cb4b64c1",
            "begin": "2022-07-12T16:31:47.254Z",
            "end": "2022-10-13T04:05:10.044Z"
        },
        {
            "id": "086b0d53-b311-4441-aaf3-935646f03d4d",
            "begin": "2022-07-12T16:31:47.254Z",
            "end": "2022-10-13T04:05:10.044Z"
        }
    ])
}

fn site_info_payload() -> serde_json::Value {
    json!({
        "id": SITE_ID,
        "name": "Norwich Pear Tree",
        "devices": [
            { "id": "002b28fc-283c-47ec-9af2-ea287336dc1b", "name": "Battery 1" },
            { "id": "086b0d53-b311-4441-aaf3-935646f03d4d", "name": "Battery 2" }
        ]
    })
}

// ============================================================================
// Endpoint bindings
// ============================================================================

#[tokio::test]
async fn get_outages_sends_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/outages"))
        .and(header("x-api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(outages_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let outages = client_for(&server).get_outages().await.expect("outages");

    assert_eq!(outages.len(), 4);
    assert_eq!(outages[0].id, "002b28fc-283c-47ec-9af2-ea287336dc1b");
    assert_eq!(outages[0].name, None);
}

#[tokio::test]
async fn requests_identify_the_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/outages"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let outages = client_for(&server).get_outages().await.expect("outages");

    assert!(outages.is_empty());
    assert!(USER_AGENT.starts_with("outagesync/"));
}

#[tokio::test]
async fn get_site_info_targets_site_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/site-info/{SITE_ID}")))
        .and(header("x-api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(site_info_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let site = client_for(&server).get_site_info(SITE_ID).await.expect("site info");

    assert_eq!(site.id, SITE_ID);
    assert_eq!(site.devices[1], Device::new("086b0d53-b311-4441-aaf3-935646f03d4d", "Battery 2"));
}

#[tokio::test]
async fn post_site_outages_sends_json_body() {
    let server = MockServer::start().await;
    let outages = vec![
        Outage::new("outage1", "2022-01-01T00:00:00.000Z", "").with_name("Battery 1"),
        Outage::new("outage2", "2022-01-01T00:00:00.000Z", ""),
    ];
    Mock::given(method("POST"))
        .and(path("/site-outages/test-site"))
        .and(header("x-api-key", API_KEY))
        .and(body_json(json!([
            { "id": "outage1", "begin": "2022-01-01T00:00:00.000Z", "end": "", "name": "Battery 1" },
            { "id": "outage2", "begin": "2022-01-01T00:00:00.000Z", "end": "" }
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let response =
        client_for(&server).post_site_outages("test-site", &outages).await.expect("response");

    assert_eq!(response, json!({}));
}

#[tokio::test]
async fn client_error_body_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/site-outages/unknown-site"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Site not found" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).post_site_outages("unknown-site", &[]).await.unwrap();

    assert_eq!(response, json!({ "message": "Site not found" }));
}

#[tokio::test]
async fn exhausted_retries_surface_as_decode_error_for_typed_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/outages"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "Internal error" })),
        )
        .expect(3)
        .mount(&server)
        .await;

    let retry = RetryConfig { max_retries: 2, retryable_statuses: vec![500] };
    let result = client_with_retry(&server, retry).get_outages().await;

    // The error body is returned as-is and does not match the outage shape.
    assert!(matches!(result, Err(OutageSyncError::Decode(_))));
}

// ============================================================================
// End-to-end sync run
// ============================================================================

#[tokio::test]
async fn sync_run_retries_transient_failures_and_submits_named_outages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/outages"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/outages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(outages_payload()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/site-info/{SITE_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(site_info_payload()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/site-outages/{SITE_ID}")))
        .and(header("x-api-key", API_KEY))
        .and(body_json(json!([
            {
                "id": "002b28fc-283c-47ec-9af2-ea287336dc1b",
                "name": "Battery 1",
                "begin": "2022-05-23T12:21:27.377Z",
                "end": "2022-11-13T02:16:38.905Z"
            },
            {
                "id": "086b0d53-b311-4441-aaf3-935646f03d4d",
                "name": "Battery 2",
                "begin": "2022-07-12T16:31:47.254Z",
                "end": "2022-10-13T04:05:10.044Z"
            }
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let service = OutageSyncService::new(Arc::new(client_for(&server)));
    let report = service.run(SITE_ID, threshold()).await.expect("sync run");

    assert_eq!(report.fetched, 4);
    assert_eq!(report.retained, 2);
    assert_eq!(report.enriched, 2);
    assert_eq!(report.response, json!({}));
}

#[tokio::test]
async fn sync_run_stops_when_site_info_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/outages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(outages_payload()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/site-info/{SITE_ID}")))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "message": "Forbidden" })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let service = OutageSyncService::new(Arc::new(client_for(&server)));
    let result = service.run(SITE_ID, threshold()).await;

    assert!(matches!(result, Err(OutageSyncError::Decode(_))));
}

#[tokio::test]
async fn unreachable_api_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client =
        ApiClient::new(ApiClientConfig::new(API_KEY).with_base_url(format!("http://{addr}")))
            .unwrap();

    let result = client.get_site_info(SITE_ID).await;

    assert!(matches!(result, Err(OutageSyncError::Network(_))));
}
