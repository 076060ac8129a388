//! Core amortization engine: fixed payment plus monthly schedule simulation

use serde::{Deserialize, Serialize};

use super::schedule::{AmortizationEntry, AmortizationResult};
use crate::error::InvalidInput;

/// Inputs for one amortization calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInputs {
    /// Purchase price
    pub home_price: f64,

    /// Up-front payment, strictly below the purchase price
    pub down_payment: f64,

    /// Loan term in years
    pub term_years: u32,

    /// Annual interest rate in percent (4.0 = 4%)
    pub annual_rate_percent: f64,
}

impl LoanInputs {
    /// Financed amount after the down payment
    pub fn loan_amount(&self) -> f64 {
        self.home_price - self.down_payment
    }
}

/// Fixed-payment amortization engine
///
/// Stateless: each `compute` call reads only its inputs and allocates a
/// fresh result.
#[derive(Debug, Clone, Default)]
pub struct AmortizationCalculator;

impl AmortizationCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute the fixed monthly payment and the full monthly schedule
    pub fn compute(&self, inputs: &LoanInputs) -> Result<AmortizationResult, InvalidInput> {
        validate(inputs)?;

        let loan_amount = inputs.loan_amount();
        let monthly_rate = inputs.annual_rate_percent / 100.0 / 12.0;
        let total_months = inputs.term_years * 12;

        let payment = if monthly_rate == 0.0 {
            // No interest: pure linear amortization
            loan_amount / total_months as f64
        } else {
            // Standard fixed-payment annuity formula
            loan_amount * monthly_rate / (1.0 - (1.0 + monthly_rate).powi(-(total_months as i32)))
        };

        let mut result = AmortizationResult::new(payment);
        let mut balance = loan_amount;
        let mut cumulative_principal = 0.0;
        let mut cumulative_interest = 0.0;

        for month in 1..=total_months {
            let interest_portion = balance * monthly_rate;
            let principal_portion = payment - interest_portion;

            // Floating-point edge near payoff: stop instead of emitting a
            // negative-principal month. The schedule is an approximation of
            // the payoff month, not an exact zero-balance guarantee.
            if principal_portion < 0.0 {
                break;
            }

            cumulative_principal += principal_portion;
            cumulative_interest += interest_portion;
            balance = (balance - principal_portion).max(0.0);

            result.add_entry(AmortizationEntry {
                period_index: month,
                principal_portion,
                interest_portion,
                cumulative_principal,
                cumulative_interest,
                remaining_balance: balance,
            });

            if balance <= 0.0 {
                break;
            }
        }

        Ok(result)
    }
}

fn validate(inputs: &LoanInputs) -> Result<(), InvalidInput> {
    if inputs.home_price <= 0.0 {
        return Err(InvalidInput::new(
            "home_price",
            "home price must be greater than zero",
        ));
    }
    if inputs.term_years == 0 {
        return Err(InvalidInput::new(
            "term_years",
            "term must be greater than zero years",
        ));
    }
    if inputs.annual_rate_percent < 0.0 {
        return Err(InvalidInput::new(
            "annual_rate_percent",
            "interest rate cannot be negative",
        ));
    }
    if inputs.down_payment < 0.0 {
        return Err(InvalidInput::new(
            "down_payment",
            "down payment cannot be negative",
        ));
    }
    if inputs.down_payment >= inputs.home_price {
        return Err(InvalidInput::new(
            "down_payment",
            "down payment must be less than home price",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::{prop_assert, proptest};

    fn thirty_year_loan() -> LoanInputs {
        LoanInputs {
            home_price: 300_000.0,
            down_payment: 60_000.0,
            term_years: 30,
            annual_rate_percent: 4.0,
        }
    }

    #[test]
    fn test_thirty_year_fixed_payment() {
        let result = AmortizationCalculator::new()
            .compute(&thirty_year_loan())
            .unwrap();

        // 240k at 4% over 360 months
        assert!((result.monthly_payment - 1145.80).abs() < 0.01);
        assert_eq!(result.entries.len(), 360);

        let first = &result.entries[0];
        assert!((first.interest_portion - 800.00).abs() < 0.01);
        assert!((first.principal_portion - 345.80).abs() < 0.01);
        assert_eq!(first.period_index, 1);
    }

    #[test]
    fn test_entries_split_payment_exactly() {
        let result = AmortizationCalculator::new()
            .compute(&thirty_year_loan())
            .unwrap();

        for entry in &result.entries {
            assert!(
                (entry.principal_portion + entry.interest_portion - result.monthly_payment).abs()
                    < 1e-9
            );
        }
    }

    #[test]
    fn test_balance_non_increasing_and_paid_off() {
        let result = AmortizationCalculator::new()
            .compute(&thirty_year_loan())
            .unwrap();

        let mut prev = f64::INFINITY;
        for entry in &result.entries {
            assert!(entry.remaining_balance <= prev + 1e-9);
            prev = entry.remaining_balance;
        }

        let summary = result.summary();
        assert!(summary.final_balance.abs() < 0.01);
        assert!((summary.total_principal - 240_000.0).abs() < 0.01);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        let inputs = LoanInputs {
            home_price: 120_000.0,
            down_payment: 0.0,
            term_years: 10,
            annual_rate_percent: 0.0,
        };
        let result = AmortizationCalculator::new().compute(&inputs).unwrap();

        assert_relative_eq!(result.monthly_payment, 1000.0, epsilon = 1e-9);
        for entry in &result.entries {
            assert_eq!(entry.interest_portion, 0.0);
        }
        assert!(result.summary().final_balance.abs() < 1e-6);
    }

    #[test]
    fn test_validation_rejections() {
        let calc = AmortizationCalculator::new();
        let base = thirty_year_loan();

        let err = calc
            .compute(&LoanInputs {
                home_price: 0.0,
                ..base.clone()
            })
            .unwrap_err();
        assert_eq!(err.field, "home_price");

        let err = calc
            .compute(&LoanInputs {
                term_years: 0,
                ..base.clone()
            })
            .unwrap_err();
        assert_eq!(err.field, "term_years");

        let err = calc
            .compute(&LoanInputs {
                annual_rate_percent: -0.5,
                ..base.clone()
            })
            .unwrap_err();
        assert_eq!(err.field, "annual_rate_percent");

        let err = calc
            .compute(&LoanInputs {
                down_payment: -1.0,
                ..base.clone()
            })
            .unwrap_err();
        assert_eq!(err.field, "down_payment");

        let err = calc
            .compute(&LoanInputs {
                down_payment: 300_000.0,
                ..base
            })
            .unwrap_err();
        assert_eq!(err.reason, "down payment must be less than home price");
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_schedule_pays_off_the_loan(
            home_price_k in 50u32..2_000,
            down_pct in 0u32..90,
            term_years in 1u32..41,
            rate_bp in 0u32..1_500
        ) {
            let inputs = LoanInputs {
                home_price: home_price_k as f64 * 1000.0,
                down_payment: home_price_k as f64 * 1000.0 * down_pct as f64 / 100.0,
                term_years,
                annual_rate_percent: rate_bp as f64 / 100.0,
            };

            let result = AmortizationCalculator::new().compute(&inputs).unwrap();
            prop_assert!(result.entries.len() <= (term_years * 12) as usize);

            let mut prev = f64::INFINITY;
            for entry in &result.entries {
                prop_assert!(entry.remaining_balance <= prev + 1e-6);
                prev = entry.remaining_balance;
            }

            let summary = result.summary();
            prop_assert!(summary.final_balance.abs() < 0.01);
            prop_assert!((summary.total_principal - inputs.loan_amount()).abs() < 0.01);
        }
    }
}
