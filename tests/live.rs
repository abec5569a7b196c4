//! Live tests against the Adjust sandbox.
//!
//! Run with `cargo test --test live -- --ignored` after exporting
//! `ADJUST_APP_TOKEN`, `ADJUST_DEVICE_ID`, `ADJUST_EVENT_TOKEN` and
//! `ADJUST_REVENUE_TOKEN`.

use adjust_s2s::{AdjustClient, CustomParams, DeviceIdType, Environment};
use chrono::Utc;

fn var(key: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| panic!("{} must be set", key))
}

fn sandbox_client() -> AdjustClient {
    AdjustClient::new(var("ADJUST_APP_TOKEN"), Environment::Sandbox)
}

#[tokio::test]
#[ignore = "requires Adjust sandbox credentials"]
async fn test_live_track_event() {
    let resp = sandbox_client()
        .track_event(
            DeviceIdType::Idfa,
            &var("ADJUST_DEVICE_ID"),
            &var("ADJUST_EVENT_TOKEN"),
            &Utc::now(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status, "OK");
}

#[tokio::test]
#[ignore = "requires Adjust sandbox credentials"]
async fn test_live_track_revenue() {
    let resp = sandbox_client()
        .track_revenue(
            DeviceIdType::Idfa,
            &var("ADJUST_DEVICE_ID"),
            &var("ADJUST_REVENUE_TOKEN"),
            100,
            &Utc::now(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status, "OK");
}

#[tokio::test]
#[ignore = "requires Adjust sandbox credentials"]
async fn test_live_custom_params() {
    let params = CustomParams::from([("source".to_string(), "live-test".to_string())]);
    let resp = sandbox_client()
        .track_event_with_params(
            DeviceIdType::Idfa,
            &var("ADJUST_DEVICE_ID"),
            &var("ADJUST_EVENT_TOKEN"),
            &Utc::now(),
            &params,
        )
        .await
        .unwrap();
    assert_eq!(resp.status, "OK");
}
