// Core module: the AssetValue entity and everything that operates on it.
//
// DETERMINISM GUARANTEES:
// =======================
// 1. No float arithmetic: magnitudes are arbitrary-precision integers of base units
// 2. Same value → same base-unit string, same precision string, same serialized bytes
// 3. No I/O except InMemoryAssetRegistry::from_path, which callers invoke explicitly
//
// INVARIANTS:
// - An AssetValue always holds a validated AssetIdentity
// - Values never change after construction; operations return new values
// - Inexact results (precision scaling, division, display) truncate toward zero

pub mod asset;
pub mod decimal;
pub mod value;
pub mod format;
pub mod arithmetic;
pub mod serialization;
pub mod registry;
