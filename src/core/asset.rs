//! Asset records and identities. An `Asset` is the metadata record handed out by an asset registry;
//! an `AssetIdentity` is the validated `(asset_id, precision)` pair every `AssetValue` carries.

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::error::{AssetValueError, Result};

/// Largest accepted precision. Bounds the `10^precision` scaling applied to untrusted input.
pub const MAX_PRECISION: u32 = 255;

/// Asset metadata as published by an asset registry.
///
/// `precision` is kept signed and unvalidated: registries and serialized payloads are external
/// input, so a record may arrive with a bogus value. It is checked when an `AssetIdentity` is
/// derived from the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub asset_id: String,
    #[serde(default)]
    pub chain_id: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    pub precision: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_address_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_tx_link: Option<String>,
}

impl Asset {
    /// Minimal record with only the fields `AssetValue` consumes.
    pub fn new(asset_id: impl Into<String>, precision: i64) -> Self {
        Self {
            asset_id: asset_id.into(),
            chain_id: String::new(),
            symbol: String::new(),
            name: String::new(),
            precision,
            color: None,
            icon: None,
            explorer: None,
            explorer_address_link: None,
            explorer_tx_link: None,
        }
    }

    /// Extracts and validates the identity carried by this record.
    pub fn identity(&self) -> Result<AssetIdentity> {
        AssetIdentity::new(self.asset_id.clone(), self.precision)
    }
}

/// Validated asset identity. Two identities denote the same asset type iff their ids are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetIdentity {
    asset_id: String,
    precision: u32,
}

impl AssetIdentity {
    /// Fails with `InvalidAsset` on an empty id or a precision outside `0..=MAX_PRECISION`.
    ///
    /// # Examples
    /// ```
    /// use asset_value::core::asset::AssetIdentity;
    ///
    /// assert!(AssetIdentity::new("cosmos:osmosis-1/ibc:118", 6).is_ok());
    /// assert!(AssetIdentity::new("", 6).is_err());
    /// assert!(AssetIdentity::new("cosmos:osmosis-1/ibc:118", -1).is_err());
    /// ```
    pub fn new(asset_id: impl Into<String>, precision: i64) -> Result<Self> {
        let asset_id = asset_id.into();
        if asset_id.is_empty() {
            return Err(AssetValueError::InvalidAsset);
        }
        let precision = u32::try_from(precision)
            .ok()
            .filter(|p| *p <= MAX_PRECISION)
            .ok_or(AssetValueError::InvalidAsset)?;
        Ok(Self { asset_id, precision })
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn is_same_asset(&self, other: &AssetIdentity) -> bool {
        self.asset_id == other.asset_id
    }

    pub(crate) fn with_precision(&self, precision: u32) -> Self {
        Self {
            asset_id: self.asset_id.clone(),
            precision,
        }
    }
}

impl fmt::Display for AssetIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (precision {})", self.asset_id, self.precision)
    }
}

impl TryFrom<&Asset> for AssetIdentity {
    type Error = AssetValueError;

    fn try_from(asset: &Asset) -> Result<Self> {
        asset.identity()
    }
}

/// Where a constructor takes its asset identity from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRef {
    /// A full registry record.
    Asset(Asset),
    /// A bare id and precision, unvalidated.
    Identity { asset_id: String, precision: i64 },
}

impl AssetRef {
    pub fn identity(asset_id: impl Into<String>, precision: i64) -> Self {
        AssetRef::Identity {
            asset_id: asset_id.into(),
            precision,
        }
    }

    pub fn resolve(&self) -> Result<AssetIdentity> {
        match self {
            AssetRef::Asset(asset) => asset.identity(),
            AssetRef::Identity { asset_id, precision } => {
                AssetIdentity::new(asset_id.clone(), *precision)
            }
        }
    }
}

impl From<Asset> for AssetRef {
    fn from(asset: Asset) -> Self {
        AssetRef::Asset(asset)
    }
}

impl From<AssetIdentity> for AssetRef {
    fn from(identity: AssetIdentity) -> Self {
        AssetRef::Identity {
            asset_id: identity.asset_id,
            precision: i64::from(identity.precision),
        }
    }
}
