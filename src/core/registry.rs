//! Asset registry contract and an in-memory catalog.
//!
//! A registry maps an asset id to its `Asset` record or reports the id as unknown. Lookups are
//! synchronous and side-effect free; the in-memory catalog is immutable once built.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::trace;
use crate::core::asset::Asset;
use crate::error::{AssetValueError, Result};

/// Source of asset metadata.
pub trait AssetRegistry {
    /// Returns the record for `asset_id`, or `UnknownAsset`.
    fn lookup(&self, asset_id: &str) -> Result<Asset>;

    fn contains(&self, asset_id: &str) -> bool {
        self.lookup(asset_id).is_ok()
    }
}

/// Catalog held in memory, keyed by asset id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssetRegistry {
    assets: HashMap<String, Asset>,
}

impl InMemoryAssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog. Fails with `Registry` if two records share an id.
    pub fn from_assets(assets: impl IntoIterator<Item = Asset>) -> Result<Self> {
        let mut registry = Self::new();
        for asset in assets {
            if registry.assets.contains_key(&asset.asset_id) {
                return Err(AssetValueError::Registry(format!(
                    "duplicate asset id {}",
                    asset.asset_id
                )));
            }
            registry.assets.insert(asset.asset_id.clone(), asset);
        }
        Ok(registry)
    }

    /// Parses a JSON array of asset records (camelCase keys).
    ///
    /// # Examples
    /// ```
    /// use asset_value::{AssetRegistry, InMemoryAssetRegistry};
    ///
    /// let registry = InMemoryAssetRegistry::from_json(
    ///     r#"[{"assetId":"cosmos:osmosis-1/slip44:118","symbol":"OSMO","name":"Osmosis","precision":6}]"#,
    /// ).unwrap();
    /// assert_eq!(registry.lookup("cosmos:osmosis-1/slip44:118").unwrap().precision, 6);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let assets: Vec<Asset> = serde_json::from_str(json)
            .map_err(|e| {
                AssetValueError::Registry(format!("Failed to parse asset catalog: {}", e))
            })?;
        Self::from_assets(assets)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            AssetValueError::Registry(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Asset ids in sorted order.
    pub fn asset_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.assets.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl AssetRegistry for InMemoryAssetRegistry {
    fn lookup(&self, asset_id: &str) -> Result<Asset> {
        trace!(asset_id, "asset registry lookup");
        self.assets
            .get(asset_id)
            .cloned()
            .ok_or_else(|| AssetValueError::UnknownAsset(asset_id.to_string()))
    }
}
