//! The `AssetValue` entity: an exact number of base units of one asset.
//!
//! # Invariants
//! - The magnitude is an integer count of base units; fractions never exist.
//! - The identity has passed `AssetIdentity::new` validation.
//! - Values are immutable. Every operation returns a new value.

use num_bigint::BigInt;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use crate::core::asset::{AssetIdentity, AssetRef};
use crate::core::decimal::DecimalNumber;
use crate::core::registry::AssetRegistry;
use crate::core::serialization::SerializedAssetValue;
use crate::error::{AssetValueError, Result};

/// How the numeral handed to a constructor is scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetValueFormat {
    /// Already a count of base units.
    BaseUnit,
    /// A display amount, multiplied by `10^precision` on construction.
    Precision,
}

impl FromStr for AssetValueFormat {
    type Err = AssetValueError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "base" | "base_unit" | "base-unit" => Ok(AssetValueFormat::BaseUnit),
            "precision" => Ok(AssetValueFormat::Precision),
            _ => Err(AssetValueError::InvalidValue(s.to_string())),
        }
    }
}

/// Explicit construction parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetValueParams {
    pub value: String,
    pub asset: AssetRef,
    pub format: AssetValueFormat,
}

impl AssetValueParams {
    pub fn new(
        value: impl Into<String>,
        asset: impl Into<AssetRef>,
        format: AssetValueFormat,
    ) -> Self {
        Self {
            value: value.into(),
            asset: asset.into(),
            format,
        }
    }
}

/// The two legal construction inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetValueInit {
    Params(AssetValueParams),
    Serialized(SerializedAssetValue),
}

impl From<AssetValueParams> for AssetValueInit {
    fn from(params: AssetValueParams) -> Self {
        AssetValueInit::Params(params)
    }
}

impl From<SerializedAssetValue> for AssetValueInit {
    fn from(serialized: SerializedAssetValue) -> Self {
        AssetValueInit::Serialized(serialized)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetValue {
    identity: AssetIdentity,
    magnitude: BigInt,
}

impl AssetValue {
    /// Builds a value from either construction input.
    ///
    /// # Examples
    /// ```
    /// use asset_value::{AssetRef, AssetValue, AssetValueFormat, AssetValueParams};
    ///
    /// let value = AssetValue::new(AssetValueParams::new(
    ///     "42",
    ///     AssetRef::identity("cosmos:osmosis-1/ibc:118", 6),
    ///     AssetValueFormat::Precision,
    /// ).into()).unwrap();
    /// assert_eq!(value.to_base_unit(), "42000000");
    /// ```
    pub fn new(init: AssetValueInit) -> Result<Self> {
        match init {
            AssetValueInit::Params(params) => Self::from_params(params),
            AssetValueInit::Serialized(serialized) => Self::from_serialized(serialized.as_str()),
        }
    }

    pub fn from_params(params: AssetValueParams) -> Result<Self> {
        let identity = params.asset.resolve().map_err(|e| {
            debug!(asset = ?params.asset, "rejected asset identity");
            e
        })?;
        Self::from_numeral(identity, &params.value, params.format)
    }

    /// Parses `value` in the given format. Fractional base units are truncated toward zero.
    pub fn from_numeral(
        identity: AssetIdentity,
        value: &str,
        format: AssetValueFormat,
    ) -> Result<Self> {
        let decimal: DecimalNumber = value.parse().map_err(|e| {
            debug!(value, "rejected numeral");
            e
        })?;
        let magnitude = match format {
            AssetValueFormat::BaseUnit => decimal.to_scaled_integer(0),
            AssetValueFormat::Precision => decimal.to_scaled_integer(identity.precision()),
        };
        Ok(Self::from_base_units(identity, magnitude))
    }

    /// Wraps an already-validated identity and a base-unit count.
    pub fn from_base_units(identity: AssetIdentity, magnitude: impl Into<BigInt>) -> Self {
        Self {
            identity,
            magnitude: magnitude.into(),
        }
    }

    pub fn from_precision(identity: AssetIdentity, value: &str) -> Result<Self> {
        Self::from_numeral(identity, value, AssetValueFormat::Precision)
    }

    /// Resolves `asset_id` through `registry` and parses `value` against the returned precision.
    pub fn from_registry<R: AssetRegistry + ?Sized>(
        registry: &R,
        asset_id: &str,
        value: &str,
        format: AssetValueFormat,
    ) -> Result<Self> {
        let asset = registry.lookup(asset_id)?;
        Self::from_params(AssetValueParams::new(value, asset, format))
    }

    pub fn identity(&self) -> &AssetIdentity {
        &self.identity
    }

    pub fn asset_id(&self) -> &str {
        self.identity.asset_id()
    }

    pub fn precision(&self) -> u32 {
        self.identity.precision()
    }

    /// Signed count of base units.
    pub fn base_units(&self) -> &BigInt {
        &self.magnitude
    }
}

impl FromStr for AssetValue {
    type Err = AssetValueError;

    /// Parses the serialized form.
    fn from_str(s: &str) -> Result<Self> {
        Self::from_serialized(s)
    }
}

impl fmt::Display for AssetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_precision(None))
    }
}
