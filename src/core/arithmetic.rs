//! Type-checked arithmetic and comparison on `AssetValue`.
//!
//! Addition, subtraction and every comparison require both operands to carry the same asset id.
//! Operands of different precision are scaled to the larger one first. Multiplication and division
//! take a plain scalar and never check assets. Inexact results truncate toward zero.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::cmp::{self, Ordering};
use crate::core::decimal::{pow10, truncate_pow10, DecimalNumber};
use crate::core::value::AssetValue;
use crate::error::{AssetOperation, AssetValueError, Result};

/// A unitless multiplier or divisor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar(DecimalNumber);

impl Scalar {
    pub fn as_decimal(&self) -> &DecimalNumber {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// Conversion into a `Scalar`. Integers always convert; strings are parsed as decimal numerals.
pub trait IntoScalar {
    fn into_scalar(self) -> Result<Scalar>;
}

impl IntoScalar for Scalar {
    fn into_scalar(self) -> Result<Scalar> {
        Ok(self)
    }
}

impl IntoScalar for DecimalNumber {
    fn into_scalar(self) -> Result<Scalar> {
        Ok(Scalar(self))
    }
}

impl IntoScalar for &str {
    fn into_scalar(self) -> Result<Scalar> {
        self.parse::<DecimalNumber>().map(Scalar)
    }
}

impl IntoScalar for String {
    fn into_scalar(self) -> Result<Scalar> {
        self.as_str().into_scalar()
    }
}

impl IntoScalar for &String {
    fn into_scalar(self) -> Result<Scalar> {
        self.as_str().into_scalar()
    }
}

impl IntoScalar for BigInt {
    fn into_scalar(self) -> Result<Scalar> {
        Ok(Scalar(DecimalNumber::from(self)))
    }
}

macro_rules! impl_into_scalar_for_int {
    ($($t:ty),*) => {
        $(
            impl IntoScalar for $t {
                fn into_scalar(self) -> Result<Scalar> {
                    BigInt::from(self).into_scalar()
                }
            }
        )*
    };
}

impl_into_scalar_for_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, isize, usize);

impl AssetValue {
    /// Both magnitudes expressed at the larger of the two precisions.
    fn reconcile(
        &self,
        other: &AssetValue,
        operation: AssetOperation,
    ) -> Result<(BigInt, BigInt, u32)> {
        if !self.identity().is_same_asset(other.identity()) {
            return Err(AssetValueError::TypeMismatch {
                operation,
                other: other.asset_id().to_string(),
                receiver: self.asset_id().to_string(),
            });
        }
        let common = cmp::max(self.precision(), other.precision());
        let lhs = self.base_units() * pow10(common - self.precision());
        let rhs = other.base_units() * pow10(common - other.precision());
        Ok((lhs, rhs, common))
    }

    fn with_magnitude(&self, precision: u32, magnitude: BigInt) -> AssetValue {
        AssetValue::from_base_units(self.identity().with_precision(precision), magnitude)
    }

    /// Sum of two values of the same asset.
    ///
    /// # Examples
    /// ```
    /// use asset_value::{AssetIdentity, AssetValue};
    ///
    /// let osmo = AssetIdentity::new("cosmos:osmosis-1/ibc:118", 6).unwrap();
    /// let a = AssetValue::from_base_units(osmo.clone(), 420);
    /// let b = AssetValue::from_precision(osmo, "42").unwrap();
    /// assert_eq!(a.plus(&b).unwrap().to_base_unit(), "42000420");
    /// ```
    pub fn plus(&self, other: &AssetValue) -> Result<AssetValue> {
        let (lhs, rhs, precision) = self.reconcile(other, AssetOperation::Add)?;
        Ok(self.with_magnitude(precision, lhs + rhs))
    }

    pub fn minus(&self, other: &AssetValue) -> Result<AssetValue> {
        let (lhs, rhs, precision) = self.reconcile(other, AssetOperation::Subtract)?;
        Ok(self.with_magnitude(precision, lhs - rhs))
    }

    pub fn multiplied_by(&self, scalar: impl IntoScalar) -> Result<AssetValue> {
        let scalar = scalar.into_scalar()?;
        let decimal = scalar.as_decimal();
        let product = self.base_units() * decimal.mantissa();
        let magnitude = truncate_pow10(&product, decimal.scale());
        Ok(self.with_magnitude(self.precision(), magnitude))
    }

    pub fn divided_by(&self, scalar: impl IntoScalar) -> Result<AssetValue> {
        let scalar = scalar.into_scalar()?;
        if scalar.is_zero() {
            return Err(AssetValueError::DivisionByZero);
        }
        let decimal = scalar.as_decimal();
        let numerator = self.base_units() * pow10(decimal.scale());
        // BigInt division truncates toward zero.
        let magnitude = numerator / decimal.mantissa();
        Ok(self.with_magnitude(self.precision(), magnitude))
    }

    /// Remainder-aware division: quotient truncated toward zero, plus the leftover base units.
    pub fn divided_with_remainder(&self, divisor: u64) -> Result<(AssetValue, AssetValue)> {
        if divisor == 0 {
            return Err(AssetValueError::DivisionByZero);
        }
        let (quotient, remainder) = self.base_units().div_rem(&BigInt::from(divisor));
        Ok((
            self.with_magnitude(self.precision(), quotient),
            self.with_magnitude(self.precision(), remainder),
        ))
    }

    /// Orders two values of the same asset.
    pub fn compare(&self, other: &AssetValue) -> Result<Ordering> {
        let (lhs, rhs, _) = self.reconcile(other, AssetOperation::Compare)?;
        Ok(lhs.cmp(&rhs))
    }

    pub fn is_equal_to(&self, other: &AssetValue) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    pub fn is_greater_than(&self, other: &AssetValue) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn is_greater_than_or_equal_to(&self, other: &AssetValue) -> Result<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    pub fn is_less_than(&self, other: &AssetValue) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn is_less_than_or_equal_to(&self, other: &AssetValue) -> Result<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    pub fn is_negative(&self) -> bool {
        self.base_units().is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.base_units().is_positive()
    }

    pub fn is_zero(&self) -> bool {
        self.base_units().is_zero()
    }

    pub fn negated(&self) -> AssetValue {
        self.with_magnitude(self.precision(), -self.base_units())
    }

    pub fn abs(&self) -> AssetValue {
        self.with_magnitude(self.precision(), self.base_units().abs())
    }
}
