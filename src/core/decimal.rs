//! Exact parsing of decimal numerals. A numeral is held as an integer mantissa and a base-10 scale,
//! so `"69.420"` is `69420 × 10^-3`. No float is ever involved.
//!
//! Accepted grammar: optional sign, digits with an optional fractional part (at least one digit
//! overall), optional exponent (`e`/`E`, optional sign, digits). Surrounding whitespace is ignored.

use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;
use std::str::FromStr;
use crate::error::{AssetValueError, Result};

/// Largest exponent magnitude accepted in scientific notation.
pub const MAX_EXPONENT: i64 = 1024;

/// Returns `10^exp`.
pub(crate) fn pow10(exp: u32) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exp as usize)
}

/// Divides by `10^exp`, truncating toward zero.
pub(crate) fn truncate_pow10(value: &BigInt, exp: u32) -> BigInt {
    if exp == 0 {
        return value.clone();
    }
    value / pow10(exp)
}

/// An exact decimal number: `mantissa × 10^-scale`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalNumber {
    mantissa: BigInt,
    scale: u32,
}

impl DecimalNumber {
    pub fn new(mantissa: BigInt, scale: u32) -> Self {
        Self { mantissa, scale }
    }

    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// Scales the number by `10^precision` and drops any remaining fraction (toward zero).
    ///
    /// # Examples
    /// ```
    /// use asset_value::core::decimal::DecimalNumber;
    /// use num_bigint::BigInt;
    ///
    /// let d: DecimalNumber = "69.420".parse().unwrap();
    /// assert_eq!(d.to_scaled_integer(6), BigInt::from(69_420_000));
    /// assert_eq!(d.to_scaled_integer(1), BigInt::from(694));
    /// ```
    pub fn to_scaled_integer(&self, precision: u32) -> BigInt {
        if precision >= self.scale {
            &self.mantissa * pow10(precision - self.scale)
        } else {
            truncate_pow10(&self.mantissa, self.scale - precision)
        }
    }
}

impl From<BigInt> for DecimalNumber {
    fn from(mantissa: BigInt) -> Self {
        Self::new(mantissa, 0)
    }
}

impl FromStr for DecimalNumber {
    type Err = AssetValueError;

    fn from_str(input: &str) -> Result<Self> {
        let invalid = || AssetValueError::InvalidValue(input.to_string());
        let s = input.trim();

        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (number, exponent) = match s.find(|c: char| c == 'e' || c == 'E') {
            Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
            None => (s, None),
        };

        let (int_part, frac_part) = match number.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (number, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(invalid());
        }

        let exponent = match exponent {
            Some(exp) => {
                let digits = exp.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(exp);
                if digits.is_empty() || !all_digits(digits) {
                    return Err(invalid());
                }
                let value: i64 = exp.parse().map_err(|_| invalid())?;
                if value.abs() > MAX_EXPONENT {
                    return Err(invalid());
                }
                value
            }
            None => 0,
        };

        let digits = format!("{}{}", int_part, frac_part);
        let mut mantissa = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        if negative {
            mantissa = -mantissa;
        }

        let scale = frac_part.len() as i64 - exponent;
        if scale < 0 {
            let shift = u32::try_from(-scale).map_err(|_| invalid())?;
            Ok(Self::new(mantissa * pow10(shift), 0))
        } else {
            let scale = u32::try_from(scale).map_err(|_| invalid())?;
            Ok(Self::new(mantissa, scale))
        }
    }
}

impl fmt::Display for DecimalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::core::format::render_scaled(&self.mantissa, self.scale))
    }
}
