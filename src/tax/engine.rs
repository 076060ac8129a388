//! Core progressive tax engine: deduction stacking, bracket walk, and the
//! flat FICA/state/local components

use serde::{Deserialize, Serialize};

use super::breakdown::TaxResult;
use super::filing::FilingStatus;
use crate::error::InvalidInput;
use crate::tables::TaxTables;

/// Inputs for one tax calculation
///
/// Rates arrive already parsed; resolving a state code to its flat percent
/// is the caller's job (see `tables::StateRateTable`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxInputs {
    /// Household gross income for the year
    pub gross_income: f64,

    /// Federal filing status
    pub filing_status: FilingStatus,

    /// Flat state income-tax rate in percent
    pub state_rate_percent: f64,

    /// Flat local income-tax rate in percent
    pub local_rate_percent: f64,

    /// Sum of itemized pre-tax contributions (401k, HSA, other)
    pub pretax_deductions: f64,
}

/// Progressive tax engine holding the tables for one tax year
#[derive(Debug, Clone)]
pub struct ProgressiveTaxCalculator {
    tables: TaxTables,
}

impl ProgressiveTaxCalculator {
    /// Create an engine with the given table set
    pub fn new(tables: TaxTables) -> Self {
        Self { tables }
    }

    /// Create an engine with the built-in 2025 tables
    pub fn with_defaults() -> Self {
        Self::new(TaxTables::year_2025())
    }

    /// Get reference to the table set in use
    pub fn tables(&self) -> &TaxTables {
        &self.tables
    }

    /// Compute the full breakdown for one set of inputs
    pub fn compute(&self, inputs: &TaxInputs) -> Result<TaxResult, InvalidInput> {
        validate(inputs)?;

        let standard_deduction = self
            .tables
            .deductions
            .amount(inputs.filing_status)
            .ok_or_else(|| {
                InvalidInput::new(
                    "filing_status",
                    format!(
                        "no standard deduction configured for status `{}`",
                        inputs.filing_status.key()
                    ),
                )
            })?;
        let schedule = self
            .tables
            .federal
            .schedule(inputs.filing_status)
            .ok_or_else(|| {
                InvalidInput::new(
                    "filing_status",
                    format!(
                        "no federal brackets configured for status `{}`",
                        inputs.filing_status.key()
                    ),
                )
            })?;

        let taxable_income =
            (inputs.gross_income - standard_deduction - inputs.pretax_deductions).max(0.0);

        let federal_tax = schedule.tax_on(taxable_income);

        // FICA applies to the deduction-reduced taxable base, not gross
        // wages, and carries no wage-base cap. Diverges from real payroll
        // rules; preserved as the product behavior.
        let fica_tax = taxable_income * self.tables.fica_rate;

        let state_tax = taxable_income * inputs.state_rate_percent / 100.0;
        let local_tax = taxable_income * inputs.local_rate_percent / 100.0;

        let total_tax = federal_tax + fica_tax + state_tax + local_tax;
        let net_income = inputs.gross_income - total_tax;
        let effective_federal_rate_percent = if taxable_income > 0.0 {
            federal_tax / taxable_income * 100.0
        } else {
            0.0
        };

        Ok(TaxResult {
            taxable_income,
            federal_tax,
            fica_tax,
            state_tax,
            local_tax,
            total_tax,
            net_income,
            effective_federal_rate_percent,
        })
    }
}

fn validate(inputs: &TaxInputs) -> Result<(), InvalidInput> {
    if inputs.gross_income < 0.0 {
        return Err(InvalidInput::new(
            "gross_income",
            "income cannot be negative",
        ));
    }
    if inputs.state_rate_percent < 0.0 {
        return Err(InvalidInput::new(
            "state_rate_percent",
            "state rate cannot be negative",
        ));
    }
    if inputs.local_rate_percent < 0.0 {
        return Err(InvalidInput::new(
            "local_rate_percent",
            "local rate cannot be negative",
        ));
    }
    if inputs.pretax_deductions < 0.0 {
        return Err(InvalidInput::new(
            "pretax_deductions",
            "deductions cannot be negative",
        ));
    }
    Ok(())
}
