pub mod error;
pub mod core;

pub use error::{AssetOperation, AssetValueError, Result};

// Core API exports
pub use crate::core::asset::{Asset, AssetIdentity, AssetRef, MAX_PRECISION};
pub use crate::core::decimal::DecimalNumber;
pub use crate::core::value::{AssetValue, AssetValueFormat, AssetValueInit, AssetValueParams};
pub use crate::core::format::{render_scaled, DEFAULT_PRECISION};
pub use crate::core::arithmetic::{IntoScalar, Scalar};
pub use crate::core::serialization::{checksum, SerializedAssetValue, CHECKSUM_LEN, DELIMITER};
pub use crate::core::registry::{AssetRegistry, InMemoryAssetRegistry};
