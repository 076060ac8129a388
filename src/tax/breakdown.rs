//! Tax breakdown output structure

use serde::{Deserialize, Serialize};

use crate::rounding::round_cents;

/// Complete tax breakdown for one income calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxResult {
    /// Gross income minus standard deduction and pre-tax deductions,
    /// floored at zero
    pub taxable_income: f64,

    /// Federal liability from the marginal bracket walk
    pub federal_tax: f64,

    /// FICA on the taxable base (see engine notes)
    pub fica_tax: f64,

    /// Flat state tax on the taxable base
    pub state_tax: f64,

    /// Flat local tax on the taxable base
    pub local_tax: f64,

    /// Sum of all four components
    pub total_tax: f64,

    /// Gross income minus total tax
    pub net_income: f64,

    /// Federal tax as a percent of taxable income (0 when nothing is taxable)
    pub effective_federal_rate_percent: f64,
}

impl TaxResult {
    /// Copy with money fields rounded to cents (output boundary only).
    /// The effective rate is left unrounded; it is a percentage, not money.
    pub fn rounded(&self) -> Self {
        Self {
            taxable_income: round_cents(self.taxable_income),
            federal_tax: round_cents(self.federal_tax),
            fica_tax: round_cents(self.fica_tax),
            state_tax: round_cents(self.state_tax),
            local_tax: round_cents(self.local_tax),
            total_tax: round_cents(self.total_tax),
            net_income: round_cents(self.net_income),
            effective_federal_rate_percent: self.effective_federal_rate_percent,
        }
    }
}
