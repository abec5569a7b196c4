use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, TimeZone};
use serde::Deserialize;

use crate::config::{ClientConfig, DEFAULT_API_URL};
use crate::error::{Error, Result};
use crate::params::encode_params;
use crate::transport::{self, Transport, WreqTransport};
use crate::types::{CustomParams, DeviceIdType, Environment, Form, TrackingResponse};

/// `created_at` layout: a literal `Z` followed by the numeric offset
pub const TIME_LAYOUT: &str = "%Y-%m-%dT%H:%M:%SZ%z";

const EVENT_PATH: &str = "/event";
const REVENUE_PATH: &str = "/revenue";

const DEVICE_NOT_FOUND_PREFIX: &str =
    "Event failed (Device not found, contact support@adjust.com)";
const EVENT_FAILED_PREFIX: &str = "Event failed";

/// Format a timestamp for the `created_at` field
pub fn format_created_at<Tz>(created_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    created_at.format(TIME_LAYOUT).to_string()
}

/// Client for the Adjust server-to-server tracking API.
///
/// Holds no per-call state, so a single instance can be shared across tasks
/// (e.g. behind an `Arc`).
#[derive(Clone)]
pub struct AdjustClient {
    app_token: String,
    environment: Environment,
    base_url: String,
    transport: Option<Arc<dyn Transport>>,
}

impl fmt::Debug for AdjustClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjustClient")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("custom_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

impl AdjustClient {
    /// Clients without a transport share one process-wide `WreqTransport`.
    /// Its pooled connections belong to the runtime that opened them, so code
    /// that creates several tokio runtimes (e.g. one per `#[tokio::test]`)
    /// should inject a per-runtime transport with [`with_transport`].
    ///
    /// [`with_transport`]: AdjustClient::with_transport
    pub fn new(app_token: impl Into<String>, environment: Environment) -> Self {
        Self {
            app_token: app_token.into(),
            environment,
            base_url: DEFAULT_API_URL.to_string(),
            transport: None,
        }
    }

    /// Build a client from a config. A timeout or proxy gets its own
    /// transport; otherwise the shared default transport is used.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport: Option<Arc<dyn Transport>> =
            if config.timeout.is_some() || config.proxy.is_some() {
                Some(Arc::new(WreqTransport::with_options(
                    config.timeout,
                    config.proxy.as_deref(),
                )?))
            } else {
                None
            };

        Ok(Self {
            app_token: config.app_token,
            environment: config.environment,
            base_url: normalize_base_url(config.base_url),
            transport,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(base_url.into());
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the transport, or pass `None` to go back to the default.
    pub fn set_transport(&mut self, transport: Option<Arc<dyn Transport>>) {
        self.transport = transport;
    }

    pub fn app_token(&self) -> &str {
        &self.app_token
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Track a non-revenue event
    pub async fn track_event<Tz>(
        &self,
        device_id_type: DeviceIdType,
        device_id: &str,
        event_token: &str,
        created_at: &DateTime<Tz>,
    ) -> Result<TrackingResponse>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let fields = event_fields(device_id_type, device_id, event_token, created_at);
        self.send(EVENT_PATH, fields, None).await
    }

    /// Track a non-revenue event with custom parameters
    pub async fn track_event_with_params<Tz>(
        &self,
        device_id_type: DeviceIdType,
        device_id: &str,
        event_token: &str,
        created_at: &DateTime<Tz>,
        params: &CustomParams,
    ) -> Result<TrackingResponse>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let fields = event_fields(device_id_type, device_id, event_token, created_at);
        self.send(EVENT_PATH, fields, Some(params)).await
    }

    /// Track a revenue event. `amount` is in minor units (e.g. cents).
    pub async fn track_revenue<Tz>(
        &self,
        device_id_type: DeviceIdType,
        device_id: &str,
        event_token: &str,
        amount: i64,
        created_at: &DateTime<Tz>,
    ) -> Result<TrackingResponse>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut fields = event_fields(device_id_type, device_id, event_token, created_at);
        fields.insert("amount".to_string(), amount.to_string());
        self.send(REVENUE_PATH, fields, None).await
    }

    /// Track a revenue event with custom parameters
    pub async fn track_revenue_with_params<Tz>(
        &self,
        device_id_type: DeviceIdType,
        device_id: &str,
        event_token: &str,
        amount: i64,
        created_at: &DateTime<Tz>,
        params: &CustomParams,
    ) -> Result<TrackingResponse>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut fields = event_fields(device_id_type, device_id, event_token, created_at);
        fields.insert("amount".to_string(), amount.to_string());
        self.send(REVENUE_PATH, fields, Some(params)).await
    }

    async fn send(
        &self,
        path: &str,
        mut fields: Form,
        params: Option<&CustomParams>,
    ) -> Result<TrackingResponse> {
        fields.insert("s2s".to_string(), "1".to_string());
        fields.insert("app_token".to_string(), self.app_token.clone());
        if let Some(environment) = self.environment.as_str() {
            fields.insert("environment".to_string(), environment.to_string());
        }
        let params = match params {
            Some(params) => encode_params(params)?,
            None => encode_params(&CustomParams::new())?,
        };
        fields.insert("params".to_string(), params);

        let transport = match &self.transport {
            Some(transport) => transport.clone(),
            None => transport::default_transport()?,
        };

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(
            environment = %self.environment,
            fields = fields.len(),
            "Sending request to {}",
            path
        );

        let response = transport.post_form(&url, &fields).await.map_err(|e| {
            tracing::error!("Received error when sending request: {}", e);
            Error::Transport(e)
        })?;

        tracing::debug!(
            status = response.status,
            "Received HTTP response: {}",
            String::from_utf8_lossy(&response.body)
        );

        parse_response(&response.body)
    }
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

fn event_fields<Tz>(
    device_id_type: DeviceIdType,
    device_id: &str,
    event_token: &str,
    created_at: &DateTime<Tz>,
) -> Form
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    Form::from([
        ("event_token".to_string(), event_token.to_string()),
        ("created_at".to_string(), format_created_at(created_at)),
        (device_id_type.as_str().to_string(), device_id.to_string()),
    ])
}

/// Classify a response body. Adjust reports failures as plain text with a
/// 200 status, so only the body is inspected.
fn parse_response(body: &[u8]) -> Result<TrackingResponse> {
    let text = String::from_utf8_lossy(body);

    if text.starts_with(DEVICE_NOT_FOUND_PREFIX) {
        tracing::error!("Received error from Adjust: Device not found");
        return Err(Error::DeviceNotFound);
    }

    if text.starts_with(EVENT_FAILED_PREFIX) {
        let message = text.trim().to_string();
        tracing::error!("Received error from Adjust: {}", message);
        return Err(Error::Rejected(message));
    }

    // Decode the first JSON value only; trailing output is ignored.
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    TrackingResponse::deserialize(&mut deserializer).map_err(|e| {
        tracing::error!(body = %text, "Received error when decoding response: {}", e);
        Error::Decode(e)
    })
}
