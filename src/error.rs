use std::fmt;
use thiserror::Error;

/// Operation that requires both operands to carry the same asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetOperation {
    Add,
    Subtract,
    Compare,
}

impl AssetOperation {
    pub fn verb(&self) -> &'static str {
        match self {
            AssetOperation::Add => "add",
            AssetOperation::Subtract => "subtract",
            AssetOperation::Compare => "compare",
        }
    }
}

impl fmt::Display for AssetOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetValueError {
    #[error("Cannot initialize AssetValue with invalid asset")]
    InvalidAsset,

    #[error("Cannot initialize AssetValue from improperly-formatted SerializedAssetValue")]
    MalformedInput,

    #[error("Invalid checksum for SerializedAssetValue")]
    ChecksumMismatch,

    #[error("Cannot initialize AssetValue from underspecified SerializedAssetValue")]
    Underspecified,

    /// `other` is the argument's asset id, `receiver` the id of the value the method was called on.
    #[error("Cannot {operation} assets of different type ({other} and {receiver})")]
    TypeMismatch {
        operation: AssetOperation,
        other: String,
        receiver: String,
    },

    #[error("Invalid numeric value: {0:?}")]
    InvalidValue(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Unknown asset: {0}")]
    UnknownAsset(String),

    #[error("Registry error: {0}")]
    Registry(String),
}

pub type Result<T> = std::result::Result<T, AssetValueError>;
