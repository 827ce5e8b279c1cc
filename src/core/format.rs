//! Rendering of base-unit magnitudes as integer or decimal strings.
//!
//! Display rounding truncates toward zero, the same rule construction and division use.

use num_bigint::BigInt;
use num_traits::Signed;
use std::cmp;
use crate::core::decimal::{pow10, truncate_pow10};
use crate::core::value::AssetValue;

/// Fractional digits shown by `to_precision(None)` when the asset's own precision is larger.
pub const DEFAULT_PRECISION: u32 = 6;

/// Renders `value × 10^-fraction_digits` with exactly `fraction_digits` digits after the point.
///
/// # Examples
/// ```
/// use asset_value::core::format::render_scaled;
/// use num_bigint::BigInt;
///
/// assert_eq!(render_scaled(&BigInt::from(420), 4), "0.0420");
/// assert_eq!(render_scaled(&BigInt::from(-42000420), 6), "-42.000420");
/// assert_eq!(render_scaled(&BigInt::from(7), 0), "7");
/// ```
pub fn render_scaled(value: &BigInt, fraction_digits: u32) -> String {
    let digits = value.abs().to_string();
    let sign = if value.is_negative() { "-" } else { "" };
    if fraction_digits == 0 {
        return format!("{}{}", sign, digits);
    }

    let width = fraction_digits as usize + 1;
    let padded = format!("{:0>width$}", digits, width = width);
    let split = padded.len() - fraction_digits as usize;
    format!("{}{}.{}", sign, &padded[..split], &padded[split..])
}

impl AssetValue {
    /// Base-unit count as a plain integer string (`"-"` prefixed when negative).
    pub fn to_base_unit(&self) -> String {
        self.base_units().to_string()
    }

    /// Display amount (`base units / 10^precision`).
    ///
    /// Without `display_precision` the output carries `min(precision, DEFAULT_PRECISION)`
    /// fractional digits. With it, exactly that many, zero-padded.
    ///
    /// # Examples
    /// ```
    /// use asset_value::{AssetIdentity, AssetValue};
    ///
    /// let identity = AssetIdentity::new("cosmos:osmosis-1/ibc:118", 7).unwrap();
    /// let value = AssetValue::from_base_units(identity, 420);
    /// assert_eq!(value.to_precision(None), "0.000042");
    /// assert_eq!(value.to_precision(Some(18)), "0.000042000000000000");
    ///
    /// let identity = AssetIdentity::new("cosmos:osmosis-1/ibc:118", 9).unwrap();
    /// let value = AssetValue::from_base_units(identity, 420);
    /// assert_eq!(value.to_precision(Some(18)), "0.000000420000000000");
    /// ```
    pub fn to_precision(&self, display_precision: Option<u32>) -> String {
        let native = self.precision();
        let digits = display_precision.unwrap_or_else(|| cmp::min(native, DEFAULT_PRECISION));
        let scaled = if digits >= native {
            self.base_units() * pow10(digits - native)
        } else {
            truncate_pow10(self.base_units(), native - digits)
        };
        render_scaled(&scaled, digits)
    }
}
