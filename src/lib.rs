//! Client for the Adjust server-to-server event tracking API.
//!
//! ```no_run
//! use adjust_s2s::{AdjustClient, DeviceIdType, Environment};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), adjust_s2s::Error> {
//!     let client = AdjustClient::new("app_token", Environment::Sandbox);
//!     let resp = client
//!         .track_event(DeviceIdType::Idfa, "device-id", "event-token", &chrono::Utc::now())
//!         .await?;
//!     println!("{} via {}", resp.status, resp.tracker_name);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod params;
pub mod transport;
pub mod types;

pub use client::{AdjustClient, TIME_LAYOUT, format_created_at};
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use error::{Error, Result, TransportError};
pub use params::{decode_params, encode_params};
pub use transport::{HttpResponse, Transport, WreqTransport};
pub use types::{CustomParams, DeviceIdType, Environment, Form, TrackingResponse};
