//! Core growth engine: periodic compounding with recurring contributions

use serde::{Deserialize, Serialize};

use super::series::{ProjectionEntry, ProjectionResult};
use crate::error::InvalidInput;

/// Whether the periodic contribution lands before or after that period's
/// compounding step.
///
/// For the same magnitudes, contributing before compounding yields a future
/// value at least as large as contributing after, because contributed funds
/// earn one additional sub-period of growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContributionTiming {
    BeforeCompounding,
    AfterCompounding,
}

/// Inputs for one growth projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionInputs {
    /// Starting balance
    pub principal: f64,

    /// Total contributed per year, spread evenly across compounding periods
    pub annual_contribution: f64,

    /// Projection horizon in years
    pub years: u32,

    /// Annual interest rate in percent (7.0 = 7%)
    pub annual_rate_percent: f64,

    /// Compounding periods per year
    pub compounds_per_year: u32,

    /// Contribution timing relative to each compounding step
    pub timing: ContributionTiming,
}

/// Compound-interest projection engine
///
/// Stateless: each `compute` call reads only its inputs and allocates a
/// fresh result.
#[derive(Debug, Clone, Default)]
pub struct CompoundInterestProjector;

impl CompoundInterestProjector {
    pub fn new() -> Self {
        Self
    }

    /// Simulate the balance year by year and return the series plus the
    /// ending future value
    pub fn compute(&self, inputs: &ProjectionInputs) -> Result<ProjectionResult, InvalidInput> {
        validate(inputs)?;

        let periodic_rate =
            inputs.annual_rate_percent / 100.0 / inputs.compounds_per_year as f64;
        let periodic_contribution =
            inputs.annual_contribution / inputs.compounds_per_year as f64;

        let mut balance = inputs.principal;
        let mut entries = Vec::with_capacity(inputs.years as usize + 1);

        for year in 0..inputs.years {
            entries.push(ProjectionEntry {
                year_index: year,
                balance,
            });

            for _period in 0..inputs.compounds_per_year {
                match inputs.timing {
                    ContributionTiming::BeforeCompounding => {
                        balance += periodic_contribution;
                        balance *= 1.0 + periodic_rate;
                    }
                    ContributionTiming::AfterCompounding => {
                        balance *= 1.0 + periodic_rate;
                        balance += periodic_contribution;
                    }
                }
            }
        }

        entries.push(ProjectionEntry {
            year_index: inputs.years,
            balance,
        });

        Ok(ProjectionResult {
            entries,
            future_value: balance,
        })
    }
}

fn validate(inputs: &ProjectionInputs) -> Result<(), InvalidInput> {
    if inputs.years == 0 {
        return Err(InvalidInput::new(
            "years",
            "years must be greater than zero",
        ));
    }
    if inputs.annual_rate_percent < 0.0 {
        return Err(InvalidInput::new(
            "annual_rate_percent",
            "interest rate cannot be negative",
        ));
    }
    if inputs.compounds_per_year == 0 {
        return Err(InvalidInput::new(
            "compounds_per_year",
            "compounding frequency must be at least once per year",
        ));
    }
    if inputs.principal < 0.0 {
        return Err(InvalidInput::new(
            "principal",
            "principal cannot be negative",
        ));
    }
    if inputs.annual_contribution < 0.0 {
        return Err(InvalidInput::new(
            "annual_contribution",
            "contribution cannot be negative",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::{prop_assert, proptest};

    fn one_year_sample() -> ProjectionInputs {
        ProjectionInputs {
            principal: 10_000.0,
            annual_contribution: 5_000.0,
            years: 1,
            annual_rate_percent: 7.0,
            compounds_per_year: 1,
            timing: ContributionTiming::BeforeCompounding,
        }
    }

    #[test]
    fn test_single_year_contribution_before_compounding() {
        let result = CompoundInterestProjector::new()
            .compute(&one_year_sample())
            .unwrap();

        // (10000 + 5000) * 1.07
        assert_relative_eq!(result.future_value, 16_050.0, epsilon = 1e-9);
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[0].year_index, 0);
        assert_relative_eq!(result.entries[0].balance, 10_000.0, epsilon = 1e-12);
        assert_relative_eq!(
            result.entries.last().unwrap().balance,
            result.future_value,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_contribution_matches_closed_form() {
        let inputs = ProjectionInputs {
            principal: 10_000.0,
            annual_contribution: 0.0,
            years: 20,
            annual_rate_percent: 5.0,
            compounds_per_year: 12,
            timing: ContributionTiming::AfterCompounding,
        };
        let result = CompoundInterestProjector::new().compute(&inputs).unwrap();

        let expected = 10_000.0 * (1.0_f64 + 0.05 / 12.0).powi(12 * 20);
        assert_relative_eq!(result.future_value, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_before_timing_dominates_after_timing() {
        let before = one_year_sample();
        let after = ProjectionInputs {
            timing: ContributionTiming::AfterCompounding,
            ..one_year_sample()
        };

        let projector = CompoundInterestProjector::new();
        let fv_before = projector.compute(&before).unwrap().future_value;
        let fv_after = projector.compute(&after).unwrap().future_value;

        // Before: 15000 * 1.07 = 16050; after: 10700 + 5000 = 15700
        assert!(fv_before > fv_after);
        assert_relative_eq!(fv_after, 15_700.0, epsilon = 1e-9);
    }

    #[test]
    fn test_balance_non_decreasing() {
        let inputs = ProjectionInputs {
            principal: 1_000.0,
            annual_contribution: 100.0,
            years: 40,
            annual_rate_percent: 6.5,
            compounds_per_year: 4,
            timing: ContributionTiming::AfterCompounding,
        };
        let result = CompoundInterestProjector::new().compute(&inputs).unwrap();

        let mut prev = 0.0;
        for entry in &result.entries {
            assert!(entry.balance >= prev);
            prev = entry.balance;
        }
        assert_eq!(result.entries.len(), 41);
    }

    #[test]
    fn test_validation_rejections() {
        let projector = CompoundInterestProjector::new();

        let err = projector
            .compute(&ProjectionInputs {
                years: 0,
                ..one_year_sample()
            })
            .unwrap_err();
        assert_eq!(err.field, "years");

        let err = projector
            .compute(&ProjectionInputs {
                annual_rate_percent: -1.0,
                ..one_year_sample()
            })
            .unwrap_err();
        assert_eq!(err.field, "annual_rate_percent");

        let err = projector
            .compute(&ProjectionInputs {
                compounds_per_year: 0,
                ..one_year_sample()
            })
            .unwrap_err();
        assert_eq!(err.field, "compounds_per_year");

        let err = projector
            .compute(&ProjectionInputs {
                principal: -0.01,
                ..one_year_sample()
            })
            .unwrap_err();
        assert_eq!(err.field, "principal");
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_before_timing_never_trails_after_timing(
            principal in 0u32..500_000,
            contribution in 1u32..50_000,
            years in 1u32..50,
            rate_bp in 1u32..1_500,
            compounds in 1u32..13
        ) {
            let before = ProjectionInputs {
                principal: principal as f64,
                annual_contribution: contribution as f64,
                years,
                annual_rate_percent: rate_bp as f64 / 100.0,
                compounds_per_year: compounds,
                timing: ContributionTiming::BeforeCompounding,
            };
            let after = ProjectionInputs {
                timing: ContributionTiming::AfterCompounding,
                ..before.clone()
            };

            let projector = CompoundInterestProjector::new();
            let fv_before = projector.compute(&before).unwrap().future_value;
            let fv_after = projector.compute(&after).unwrap().future_value;

            prop_assert!(fv_before >= fv_after);
        }
    }
}
