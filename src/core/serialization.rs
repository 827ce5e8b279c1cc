//! Checksummed compact serialization of `AssetValue`.
//!
//! Format: `<payload>|<checksum>` where payload is
//! `{"a":<asset id>,"p":<precision>,"v":"<base units>"}` (keys always in that order, no
//! whitespace) and checksum is the first 8 lowercase hex digits of
//! the MD5 digest of the payload bytes. The checksum detects corruption; it does not authenticate.

use md5::{Digest, Md5};
use num_bigint::BigInt;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::debug;
use crate::core::asset::AssetIdentity;
use crate::core::value::AssetValue;
use crate::error::{AssetValueError, Result};

/// Separator between payload and checksum.
pub const DELIMITER: char = '|';

/// Checksum width in hex digits.
pub const CHECKSUM_LEN: usize = 8;

/// Wire/storage form of an `AssetValue`. Not validated until decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerializedAssetValue(String);

impl SerializedAssetValue {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SerializedAssetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SerializedAssetValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for SerializedAssetValue {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SerializedAssetValue {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Checksum of a payload: MD5, truncated to `CHECKSUM_LEN` hex digits.
///
/// # Examples
/// ```
/// use asset_value::core::serialization::checksum;
///
/// let payload = r#"{"a":"cosmos:osmosis-1/ibc:118","p":6,"v":"420"}"#;
/// assert_eq!(checksum(payload), "a35b8ad1");
/// ```
pub fn checksum(payload: &str) -> String {
    let digest = Md5::digest(payload.as_bytes());
    hex::encode(&digest[..CHECKSUM_LEN / 2])
}

#[derive(Serialize)]
struct Payload<'a> {
    a: &'a str,
    p: u32,
    v: String,
}

/// Payload fields as found on input. `null` and absent both read as `None`.
#[derive(Deserialize)]
struct PayloadFields {
    a: Option<Value>,
    p: Option<Value>,
    v: Option<Value>,
}

fn encode_payload(value: &AssetValue) -> String {
    let payload = Payload {
        a: value.asset_id(),
        p: value.precision(),
        v: value.to_base_unit(),
    };
    // A struct of strings and integers always serializes.
    serde_json::to_string(&payload).unwrap_or_default()
}

fn is_checksum(s: &str) -> bool {
    s.len() == CHECKSUM_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn parse_base_units(v: &str) -> Result<BigInt> {
    let digits = v.strip_prefix('-').unwrap_or(v);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AssetValueError::InvalidValue(v.to_string()));
    }
    BigInt::parse_bytes(v.as_bytes(), 10)
        .ok_or_else(|| AssetValueError::InvalidValue(v.to_string()))
}

fn required(field: Option<Value>, key: &str) -> Result<Value> {
    field.ok_or_else(|| {
        debug!(field = key, "serialized asset value missing field");
        AssetValueError::Underspecified
    })
}

fn decode_payload(payload: &str) -> Result<AssetValue> {
    // Only an object is accepted; serde would otherwise read `[a, p, v]` into the struct.
    let fields = match serde_json::from_str::<Value>(payload) {
        Ok(object @ Value::Object(_)) => serde_json::from_value::<PayloadFields>(object)
            .map_err(|_| AssetValueError::MalformedInput)?,
        Ok(_) | Err(_) => {
            debug!("serialized asset value payload is not a JSON object");
            return Err(AssetValueError::MalformedInput);
        }
    };

    let a = required(fields.a, "a")?;
    let p = required(fields.p, "p")?;
    let v = required(fields.v, "v")?;

    let asset_id = a.as_str().ok_or(AssetValueError::InvalidAsset)?;
    let precision = p.as_i64().ok_or(AssetValueError::InvalidAsset)?;
    let identity = AssetIdentity::new(asset_id, precision)?;

    let base_units = match v {
        Value::String(s) => parse_base_units(&s)?,
        other => return Err(AssetValueError::InvalidValue(other.to_string())),
    };
    Ok(AssetValue::from_base_units(identity, base_units))
}

impl AssetValue {
    /// Compact, checksummed serialization. Equal values always serialize identically.
    pub fn to_serialized(&self) -> SerializedAssetValue {
        let payload = encode_payload(self);
        let sum = checksum(&payload);
        SerializedAssetValue(format!("{}{}{}", payload, DELIMITER, sum))
    }

    /// Decodes and verifies a serialized value.
    ///
    /// # Errors
    /// - `MalformedInput` when there is no delimiter, the checksum is not 8 hex digits, or the
    ///   payload is not a JSON object
    /// - `ChecksumMismatch` when the payload does not hash to the checksum
    /// - `Underspecified` when `a`, `p` or `v` is missing
    /// - `InvalidAsset` / `InvalidValue` when a field fails validation
    pub fn from_serialized(serialized: &str) -> Result<Self> {
        let (payload, sum) = serialized.rsplit_once(DELIMITER).ok_or_else(|| {
            debug!("serialized asset value has no delimiter");
            AssetValueError::MalformedInput
        })?;
        if !is_checksum(sum) {
            debug!(checksum = sum, "serialized asset value has a malformed checksum");
            return Err(AssetValueError::MalformedInput);
        }
        if checksum(payload) != sum.to_ascii_lowercase() {
            debug!(checksum = sum, "serialized asset value failed checksum verification");
            return Err(AssetValueError::ChecksumMismatch);
        }
        decode_payload(payload)
    }
}

impl TryFrom<&SerializedAssetValue> for AssetValue {
    type Error = AssetValueError;

    fn try_from(serialized: &SerializedAssetValue) -> Result<Self> {
        AssetValue::from_serialized(serialized.as_str())
    }
}

impl Serialize for AssetValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_serialized().as_str())
    }
}

impl<'de> Deserialize<'de> for AssetValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        AssetValue::from_serialized(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OSMO: &str = "cosmos:osmosis-1/ibc:118";

    fn osmo(base_units: i64, precision: i64) -> AssetValue {
        AssetValue::from_base_units(AssetIdentity::new(OSMO, precision).unwrap(), base_units)
    }

    #[test]
    fn test_to_serialized() {
        assert_eq!(
            osmo(420, 6).to_serialized().as_str(),
            r#"{"a":"cosmos:osmosis-1/ibc:118","p":6,"v":"420"}|a35b8ad1"#
        );
    }

    #[test]
    fn test_negative_value_serializes_signed() {
        let s = osmo(-420, 6).to_serialized();
        assert!(s.as_str().starts_with(r#"{"a":"cosmos:osmosis-1/ibc:118","p":6,"v":"-420"}|"#));
        assert_eq!(AssetValue::from_serialized(s.as_str()).unwrap(), osmo(-420, 6));
    }

    #[test]
    fn test_legacy_vector_decodes() {
        let serialized = r#"{"a":"cosmos:osmosis-1/ibc:gamm/pool/1","p":18,"v":"42"}|44def74b"#;
        let av = AssetValue::from_serialized(serialized).unwrap();
        assert_eq!(av.asset_id(), "cosmos:osmosis-1/ibc:gamm/pool/1");
        assert_eq!(av.precision(), 18);
        assert_eq!(av.to_base_unit(), "42");
    }

    #[test]
    fn test_tampered_payload_fails_checksum() {
        let tampered = r#"{"a":"cosmos:jankchain-69/ibc:gamm/pool/1","p":18,"v":"42"}|44def74b"#;
        let err = AssetValue::from_serialized(tampered).unwrap_err();
        assert_eq!(err, AssetValueError::ChecksumMismatch);
        assert_eq!(err.to_string(), "Invalid checksum for SerializedAssetValue");
    }

    #[test]
    fn test_missing_delimiter_is_malformed() {
        let no_delimiter = r#"{"a":"cosmos:osmosis-1/ibc:gamm/pool/1","p":18,"v":"42"}44def74b"#;
        let err = AssetValue::from_serialized(no_delimiter).unwrap_err();
        assert_eq!(err, AssetValueError::MalformedInput);
        assert_eq!(
            err.to_string(),
            "Cannot initialize AssetValue from improperly-formatted SerializedAssetValue"
        );
        assert_eq!(AssetValue::from_serialized("{}|abc"), Err(AssetValueError::MalformedInput));
        assert_eq!(AssetValue::from_serialized(""), Err(AssetValueError::MalformedInput));
    }

    #[test]
    fn test_missing_field_is_underspecified() {
        let payload = r#"{"a":"cosmos:osmosis-1/ibc:gamm/pool/1","v":"42"}"#;
        let serialized = format!("{}|{}", payload, checksum(payload));
        let err = AssetValue::from_serialized(&serialized).unwrap_err();
        assert_eq!(err, AssetValueError::Underspecified);
        assert_eq!(
            err.to_string(),
            "Cannot initialize AssetValue from underspecified SerializedAssetValue"
        );
    }

    #[test]
    fn test_non_object_payload_is_malformed() {
        for payload in ["[1,2,3]", "not json", "42"] {
            let serialized = format!("{}|{}", payload, checksum(payload));
            assert_eq!(
                AssetValue::from_serialized(&serialized),
                Err(AssetValueError::MalformedInput)
            );
        }
    }

    #[test]
    fn test_null_field_is_underspecified() {
        let payload = r#"{"a":"cosmos:osmosis-1/ibc:118","p":null,"v":"42"}"#;
        let serialized = format!("{}|{}", payload, checksum(payload));
        assert_eq!(AssetValue::from_serialized(&serialized), Err(AssetValueError::Underspecified));
    }

    #[test]
    fn test_unknown_payload_fields_are_ignored() {
        let payload = r#"{"v":"42","extra":true,"p":6,"a":"cosmos:osmosis-1/ibc:118"}"#;
        let serialized = format!("{}|{}", payload, checksum(payload));
        assert_eq!(AssetValue::from_serialized(&serialized).unwrap(), osmo(42, 6));
    }

    #[test]
    fn test_invalid_fields_rejected() {
        for payload in [
            r#"{"a":"","p":6,"v":"42"}"#,
            r#"{"a":"x","p":-1,"v":"42"}"#,
            r#"{"a":"x","p":6.5,"v":"42"}"#,
            r#"{"a":7,"p":6,"v":"42"}"#,
        ] {
            let serialized = format!("{}|{}", payload, checksum(payload));
            assert_eq!(
                AssetValue::from_serialized(&serialized),
                Err(AssetValueError::InvalidAsset)
            );
        }
        for payload in [r#"{"a":"x","p":6,"v":"4.2"}"#, r#"{"a":"x","p":6,"v":42}"#] {
            let serialized = format!("{}|{}", payload, checksum(payload));
            assert!(matches!(
                AssetValue::from_serialized(&serialized),
                Err(AssetValueError::InvalidValue(_))
            ));
        }
    }

    #[test]
    fn test_asset_id_needing_escapes_round_trips() {
        let identity = AssetIdentity::new("weird\"id|with/delims", 6).unwrap();
        let value = AssetValue::from_base_units(identity, 7);
        let serialized = value.to_serialized();
        assert!(serialized.as_str().starts_with(r#"{"a":"weird\"id|with/delims","p":6,"v":"7"}|"#));
        assert_eq!(AssetValue::from_serialized(serialized.as_str()).unwrap(), value);
    }

    #[test]
    fn test_try_from_serialized() {
        let serialized = SerializedAssetValue::new(
            r#"{"a":"cosmos:osmosis-1/ibc:118","p":6,"v":"420"}|a35b8ad1"#,
        );
        assert_eq!(AssetValue::try_from(&serialized).unwrap(), osmo(420, 6));

        let tampered = SerializedAssetValue::new(
            r#"{"a":"cosmos:osmosis-1/ibc:118","p":6,"v":"421"}|a35b8ad1"#,
        );
        assert_eq!(AssetValue::try_from(&tampered), Err(AssetValueError::ChecksumMismatch));
    }

    #[test]
    fn test_serde_uses_serialized_form() {
        let value = osmo(420, 6);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, serde_json::to_string(value.to_serialized().as_str()).unwrap());
        let back: AssetValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);

        let tampered = json.replace("420", "421");
        assert!(serde_json::from_str::<AssetValue>(&tampered).is_err());
    }
}
