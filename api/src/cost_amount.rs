//! Provides an exact, two-decimal representation of a billed cost.

use std::fmt;

use thiserror::Error;

use crate::currency::Currency;

/// An error that can occur when parsing a string into a `CostAmount`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseCostAmountError {
    /// The string is not a valid decimal number (e.g., "abc", "1.2.3", "").
    #[error("invalid cost amount format")]
    InvalidFormat,
    /// Costs are never negative.
    #[error("cost amount must not be negative")]
    Negative,
}

/// A billed cost in a specific currency.
///
/// The amount is stored as an integer count of minor units (cents), so the
/// two-decimal rendering never suffers from floating-point drift. The
/// `Display` implementation writes the plain number ("45.67");
/// [`CostAmount::to_display_string`] prefixes the currency symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CostAmount {
    minor: i64,
    currency: Currency,
}

impl CostAmount {
    /// Creates an amount from a floating-point value, rounding to the nearest
    /// cent.
    ///
    /// # Examples
    /// ```
    /// use api::cost_amount::CostAmount;
    /// use api::currency::Currency;
    ///
    /// let amount = CostAmount::from_float(45.67, Currency::USD);
    /// assert_eq!(amount.as_minor_units(), 4567);
    /// ```
    pub fn from_float(value: f64, currency: Currency) -> Self {
        let multiplier = 10_f64.powi(Currency::DECIMALS as i32);
        let minor = (value * multiplier).round() as i64;

        Self { minor, currency }
    }

    /// Creates an amount directly from its minor units (cents).
    pub fn from_minor(minor: i64, currency: Currency) -> Self {
        Self { minor, currency }
    }

    /// Parses a decimal string of any precision, rounding half-up to cents.
    ///
    /// Billing exports report unblended costs with many fractional digits
    /// (e.g. "12.3456789"), and occasionally in exponent notation for tiny
    /// amounts.
    ///
    /// # Examples
    /// ```
    /// use api::cost_amount::{CostAmount, ParseCostAmountError};
    /// use api::currency::Currency;
    ///
    /// let amount = CostAmount::parse("12.3456789", Currency::USD)?;
    /// assert_eq!(amount.to_string(), "12.35");
    ///
    /// let err = CostAmount::parse("-1.00", Currency::USD).unwrap_err();
    /// assert_eq!(err, ParseCostAmountError::Negative);
    /// # Ok::<(), ParseCostAmountError>(())
    /// ```
    pub fn parse(s: &str, currency: Currency) -> Result<Self, ParseCostAmountError> {
        let s = s.trim();
        if s.starts_with('-') {
            return Err(ParseCostAmountError::Negative);
        }
        let s = s.strip_prefix('+').unwrap_or(s);

        if s.contains(['e', 'E']) {
            let value: f64 = s.parse().map_err(|_| ParseCostAmountError::InvalidFormat)?;
            if !value.is_finite() {
                return Err(ParseCostAmountError::InvalidFormat);
            }
            if value < 0.0 {
                return Err(ParseCostAmountError::Negative);
            }
            let minor = (value * 10_f64.powi(Currency::DECIMALS as i32)).round();
            // i64::MAX rounds up to 2^63 as a float, so the bound is exclusive.
            if minor >= i64::MAX as f64 {
                return Err(ParseCostAmountError::InvalidFormat);
            }
            return Ok(Self::from_minor(minor as i64, currency));
        }

        let mut parts = s.split('.');
        let major_str = parts.next().unwrap_or("");
        let fraction_str = parts.next().unwrap_or("");

        if parts.next().is_some() || (major_str.is_empty() && fraction_str.is_empty()) {
            return Err(ParseCostAmountError::InvalidFormat);
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(major_str) || !all_digits(fraction_str) {
            return Err(ParseCostAmountError::InvalidFormat);
        }

        let major_units = if major_str.is_empty() {
            0
        } else {
            major_str
                .parse::<i64>()
                .map_err(|_| ParseCostAmountError::InvalidFormat)?
        };

        let decimals = Currency::DECIMALS as usize;
        let (kept, dropped) = if fraction_str.len() > decimals {
            fraction_str.split_at(decimals)
        } else {
            (fraction_str, "")
        };

        let kept_units = if kept.is_empty() {
            0
        } else {
            kept.parse::<i64>()
                .map_err(|_| ParseCostAmountError::InvalidFormat)?
        };
        let minor_units = kept_units * 10_i64.pow((decimals - kept.len()) as u32);
        let round_up = dropped.bytes().next().is_some_and(|b| b >= b'5');

        let total = major_units
            .checked_mul(10_i64.pow(Currency::DECIMALS))
            .and_then(|m| m.checked_add(minor_units))
            .and_then(|m| m.checked_add(i64::from(round_up)))
            .ok_or(ParseCostAmountError::InvalidFormat)?;

        Ok(Self::from_minor(total, currency))
    }

    /// Returns the currency of the amount.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the raw amount in cents.
    pub fn as_minor_units(&self) -> i64 {
        self.minor
    }

    /// Returns the amount as a float, e.g. for serializing back to JSON.
    pub fn as_f64(&self) -> f64 {
        self.minor as f64 / 10_f64.powi(Currency::DECIMALS as i32)
    }

    /// Formats the amount with its currency symbol (e.g., "$45.67").
    pub fn to_display_string(&self) -> String {
        format!("{}{}", self.currency.symbol(), self)
    }
}

impl fmt::Display for CostAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divisor = 10_u64.pow(Currency::DECIMALS);
        let abs = self.minor.unsigned_abs();
        let sign = if self.minor < 0 { "-" } else { "" };

        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            abs / divisor,
            abs % divisor,
            width = Currency::DECIMALS as usize
        )
    }
}
