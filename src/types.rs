use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Caller-supplied custom parameters, forwarded as base64-encoded JSON.
///
/// A `BTreeMap` keeps the JSON key order stable.
pub type CustomParams = BTreeMap<String, String>;

/// Outgoing form fields, encoded sorted by key.
pub type Form = BTreeMap<String, String>;

/// Where Adjust should store the event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// No `environment` field is sent; Adjust treats the event as production.
    #[default]
    Unspecified,
    Production,
    Sandbox,
}

impl Environment {
    /// Wire value, `None` when the field should be left out of the request
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Self::Unspecified => None,
            Self::Production => Some("production"),
            Self::Sandbox => Some("sandbox"),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().unwrap_or("unspecified"))
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "unspecified" => Ok(Self::Unspecified),
            "production" => Ok(Self::Production),
            "sandbox" => Ok(Self::Sandbox),
            other => Err(Error::Config(format!("unknown environment: {}", other))),
        }
    }
}

/// Kind of device identifier attached to an event.
///
/// The wire name is the form key that carries the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceIdType {
    /// iOS ID for Advertisers
    Idfa,
    /// iOS ID for Vendors
    Idfv,
    /// MAC address without ":" (Android only)
    Mac,
    /// MD5 of the upper-case MAC without ":" (Android only)
    MacMd5,
    /// SHA1 of the upper-case MAC with ":" (Android only)
    MacSha1,
    AndroidId,
    /// Google Play Advertiser ID
    GpsAdid,
}

impl DeviceIdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idfa => "idfa",
            Self::Idfv => "idfv",
            Self::Mac => "mac",
            Self::MacMd5 => "mac_md5",
            Self::MacSha1 => "mac_sha1",
            Self::AndroidId => "android_id",
            Self::GpsAdid => "gps_adid",
        }
    }
}

impl fmt::Display for DeviceIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful response from the S2S API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingResponse {
    #[serde(deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub tracker_token: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub tracker_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub network: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub country: String,
}

/// Unattributed events come back with `null` tracker fields
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
