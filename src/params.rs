//! Custom parameter encoding.
//!
//! Adjust expects the `params` field to hold a JSON object, base64-encoded
//! with the standard alphabet. An empty map still produces `{}` (`e30=`).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, Result};
use crate::types::CustomParams;

/// Encode custom parameters for the `params` form field
pub fn encode_params(params: &CustomParams) -> Result<String> {
    let json = serde_json::to_vec(params).map_err(|e| Error::Params(e.to_string()))?;
    Ok(STANDARD.encode(json))
}

/// Decode a `params` form field back into a map
pub fn decode_params(encoded: &str) -> Result<CustomParams> {
    let json = STANDARD
        .decode(encoded.trim())
        .map_err(|e| Error::Params(e.to_string()))?;
    serde_json::from_slice(&json).map_err(|e| Error::Params(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params() {
        assert_eq!(encode_params(&CustomParams::new()).unwrap(), "e30=");
    }

    #[test]
    fn test_single_key() {
        let params = CustomParams::from([("testdata".to_string(), "4321".to_string())]);
        let encoded = encode_params(&params).unwrap();
        assert_eq!(encoded, STANDARD.encode(r#"{"testdata":"4321"}"#));
        assert_eq!(decode_params(&encoded).unwrap(), params);
    }

    #[test]
    fn test_keys_sorted() {
        let params = CustomParams::from([
            ("zeta".to_string(), "1".to_string()),
            ("alpha".to_string(), "2".to_string()),
        ]);
        let decoded = STANDARD.decode(encode_params(&params).unwrap()).unwrap();
        assert_eq!(decoded, br#"{"alpha":"2","zeta":"1"}"#);
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(decode_params("!!!"), Err(Error::Params(_))));
        // valid base64, not a JSON object
        assert!(matches!(
            decode_params(&STANDARD.encode("[1,2]")),
            Err(Error::Params(_))
        ));
    }
}
