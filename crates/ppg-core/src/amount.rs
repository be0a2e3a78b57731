//! # Amounts
//!
//! Iranian gateways settle in Rial while most storefronts price in Toman.
//! One Toman is ten Rial; the gateway's base unit is always the Rial.

use crate::error::{GatewayError, GatewayResult};
use serde::{Deserialize, Serialize};

/// Default lower bound, in the gateway's base unit
pub const DEFAULT_MIN_AMOUNT: u64 = 1_000;

/// Default upper bound, in the gateway's base unit
pub const DEFAULT_MAX_AMOUNT: u64 = 1_000_000_000;

/// Rial per Toman
pub const SMALLEST_UNIT_FACTOR: u64 = 10;

/// Currency unit of a caller-facing amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountUnit {
    Toman,
    Rial,
}

impl AmountUnit {
    /// Convert an amount in this unit to Rial
    pub fn to_rial(self, amount: u64) -> GatewayResult<u64> {
        match self {
            AmountUnit::Rial => Ok(amount),
            AmountUnit::Toman => amount.checked_mul(SMALLEST_UNIT_FACTOR).ok_or(
                GatewayError::InvalidAmount {
                    amount,
                    min: 0,
                    max: u64::MAX / SMALLEST_UNIT_FACTOR,
                },
            ),
        }
    }
}

/// Conversion and bounds applied to an amount before it is sent upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountOptions {
    /// Multiply the amount by ten before sending it
    pub convert_to_smallest_unit: bool,
    /// Inclusive lower bound, checked after conversion
    pub min_amount: u64,
    /// Inclusive upper bound, checked after conversion
    pub max_amount: u64,
}

impl AmountOptions {
    pub fn new() -> Self {
        Self {
            convert_to_smallest_unit: false,
            min_amount: DEFAULT_MIN_AMOUNT,
            max_amount: DEFAULT_MAX_AMOUNT,
        }
    }

    /// Builder: treat incoming amounts as Toman
    pub fn converting(mut self, convert: bool) -> Self {
        self.convert_to_smallest_unit = convert;
        self
    }

    /// Builder: override the accepted range
    pub fn with_bounds(mut self, min_amount: u64, max_amount: u64) -> Self {
        self.min_amount = min_amount;
        self.max_amount = max_amount;
        self
    }

    /// Unit the caller's amount is expressed in
    pub fn unit(&self) -> AmountUnit {
        if self.convert_to_smallest_unit {
            AmountUnit::Toman
        } else {
            AmountUnit::Rial
        }
    }

    /// Convert without checking bounds (used on the verification path)
    pub fn convert(&self, amount: u64) -> GatewayResult<u64> {
        self.unit().to_rial(amount)
    }

    /// Convert and check the result against `[min_amount, max_amount]`
    pub fn normalize(&self, amount: u64) -> GatewayResult<u64> {
        let converted = self.convert(amount).map_err(|_| GatewayError::InvalidAmount {
            amount,
            min: self.min_amount,
            max: self.max_amount,
        })?;

        if converted < self.min_amount || converted > self.max_amount {
            return Err(GatewayError::InvalidAmount {
                amount: converted,
                min: self.min_amount,
                max: self.max_amount,
            });
        }

        Ok(converted)
    }
}

impl Default for AmountOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = AmountOptions::default();
        assert!(!opts.convert_to_smallest_unit);
        assert_eq!(opts.min_amount, 1_000);
        assert_eq!(opts.max_amount, 1_000_000_000);
        assert_eq!(opts.unit(), AmountUnit::Rial);
    }

    #[test]
    fn test_conversion() {
        let opts = AmountOptions::new().converting(true);
        assert_eq!(opts.normalize(5_000).unwrap(), 50_000);
        assert_eq!(AmountOptions::new().normalize(5_000).unwrap(), 5_000);
    }

    #[test]
    fn test_bounds_apply_after_conversion() {
        // 150 Toman is 1500 Rial, which clears the 1000 Rial floor
        let opts = AmountOptions::new().converting(true);
        assert_eq!(opts.normalize(150).unwrap(), 1_500);

        let err = AmountOptions::new().normalize(150).unwrap_err();
        assert!(matches!(
            err,
            GatewayError::InvalidAmount {
                amount: 150,
                min: 1_000,
                ..
            }
        ));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let opts = AmountOptions::new().with_bounds(1_000, 2_000);
        assert!(opts.normalize(1_000).is_ok());
        assert!(opts.normalize(2_000).is_ok());
        assert!(opts.normalize(999).is_err());
        assert!(opts.normalize(2_001).is_err());
    }

    #[test]
    fn test_overflow_is_invalid_amount() {
        let opts = AmountOptions::new().converting(true).with_bounds(0, u64::MAX);
        let err = opts.normalize(u64::MAX).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidAmount { .. }));
    }

    #[test]
    fn test_convert_skips_bounds() {
        let opts = AmountOptions::new().converting(true);
        assert_eq!(opts.convert(1).unwrap(), 10);
    }

    #[test]
    fn test_unit_to_rial() {
        assert_eq!(AmountUnit::Toman.to_rial(42).unwrap(), 420);
        assert_eq!(AmountUnit::Rial.to_rial(42).unwrap(), 42);
    }
}
