//! Income configuration
//!
//! Two paychecks per month, each paying the same net amount. Irregular
//! extras are shared evenly between them.

use serde::{Deserialize, Serialize};

use super::expense::{MAX_DUE_DAY, MIN_DUE_DAY};
use super::money::Money;

/// Validation errors for the income configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NegativeAmount,
    AmountTooLarge,
    PaydayOutOfRange(u32),
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Net pay per paycheck cannot be negative"),
            Self::AmountTooLarge => write!(f, "Income amounts cannot exceed {}", Money::MAX_AMOUNT),
            Self::PaydayOutOfRange(d) => write!(
                f,
                "Payday must be between {} and {}, got {}",
                MIN_DUE_DAY, MAX_DUE_DAY, d
            ),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// Paydays and pay amounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeConfig {
    /// Nominal paydays; either order is accepted
    pub paycheck_days: [u32; 2],
    pub net_per_paycheck: Money,
    pub extras: Money,
}

impl IncomeConfig {
    pub fn new(paycheck_days: [u32; 2], net_per_paycheck: Money, extras: Money) -> Self {
        Self {
            paycheck_days,
            net_per_paycheck,
            extras,
        }
    }

    /// Income attributed to each paycheck: net pay plus half of any positive extras
    ///
    /// Both paychecks always receive the same amount.
    pub fn per_paycheck_income(&self) -> Money {
        let extras_share = if self.extras.is_positive() {
            self.extras.half()
        } else {
            Money::zero()
        };
        self.net_per_paycheck + extras_share
    }

    /// Total monthly income across both paychecks
    pub fn monthly_income(&self) -> Money {
        let per = self.per_paycheck_income();
        per + per
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        for day in self.paycheck_days {
            if !(MIN_DUE_DAY..=MAX_DUE_DAY).contains(&day) {
                return Err(IncomeValidationError::PaydayOutOfRange(day));
            }
        }

        if self.net_per_paycheck.is_negative() {
            return Err(IncomeValidationError::NegativeAmount);
        }

        if !self.net_per_paycheck.is_within_limit() || !self.extras.is_within_limit() {
            return Err(IncomeValidationError::AmountTooLarge);
        }

        Ok(())
    }
}

impl Default for IncomeConfig {
    fn default() -> Self {
        Self {
            paycheck_days: [1, 16],
            net_per_paycheck: Money::from_units(2000),
            extras: Money::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extras_split_evenly() {
        let income = IncomeConfig::new([1, 16], Money::from_units(20000), Money::from_units(1000));
        assert_eq!(income.per_paycheck_income(), Money::from_units(20500));
        assert_eq!(income.monthly_income(), Money::from_units(41000));
    }

    #[test]
    fn test_zero_or_negative_extras_ignored() {
        let income = IncomeConfig::new([1, 16], Money::from_units(1500), Money::zero());
        assert_eq!(income.per_paycheck_income(), Money::from_units(1500));

        let income = IncomeConfig::new([1, 16], Money::from_units(1500), Money::from_units(-300));
        assert_eq!(income.per_paycheck_income(), Money::from_units(1500));
    }

    #[test]
    fn test_validation() {
        assert!(IncomeConfig::default().validate().is_ok());

        let bad_day = IncomeConfig::new([0, 16], Money::from_units(100), Money::zero());
        assert_eq!(bad_day.validate(), Err(IncomeValidationError::PaydayOutOfRange(0)));

        let negative = IncomeConfig::new([1, 16], Money::from_units(-1), Money::zero());
        assert_eq!(negative.validate(), Err(IncomeValidationError::NegativeAmount));

        let huge_extras = IncomeConfig::new(
            [1, 16],
            Money::from_units(100),
            Money::from_cents(Money::MAX_AMOUNT.cents() + 1),
        );
        assert_eq!(huge_extras.validate(), Err(IncomeValidationError::AmountTooLarge));
    }

    #[test]
    fn test_serialization_field_names() {
        let income = IncomeConfig::new([15, 30], Money::from_units(20000), Money::from_units(1000));
        let json = serde_json::to_value(&income).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "paycheckDays": [15, 30],
                "netPerPaycheck": 20000,
                "extras": 1000
            })
        );
    }
}
