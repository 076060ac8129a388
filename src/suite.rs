//! Calculator suite for efficient repeated calculations
//!
//! Pre-loads tax tables once, then serves any number of calculations
//! without re-reading CSV files. Tables are replaced wholesale between
//! calculations, never mutated mid-calculation.

use crate::amortization::{AmortizationCalculator, AmortizationResult, LoanInputs};
use crate::error::InvalidInput;
use crate::growth::{CompoundInterestProjector, ProjectionInputs, ProjectionResult};
use crate::tables::TaxTables;
use crate::tax::{ProgressiveTaxCalculator, TaxInputs, TaxResult};

/// Pre-loaded entry point over all three calculators
///
/// # Example
/// ```ignore
/// let suite = CalculatorSuite::from_csv()?;
///
/// let schedule = suite.amortize(&loan_inputs)?;
/// let breakdown = suite.income_tax(&tax_inputs)?;
/// ```
#[derive(Debug, Clone)]
pub struct CalculatorSuite {
    /// Pre-loaded tax tables
    tables: TaxTables,
}

impl CalculatorSuite {
    /// Create a suite with the built-in 2025 tables
    pub fn new() -> Self {
        Self {
            tables: TaxTables::year_2025(),
        }
    }

    /// Create a suite by loading tables from the default CSV location
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            tables: TaxTables::from_csv()?,
        })
    }

    /// Create a suite from a specific tables directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            tables: TaxTables::from_csv_path(path)?,
        })
    }

    /// Create a suite with pre-built tables
    pub fn with_tables(tables: TaxTables) -> Self {
        Self { tables }
    }

    /// Compute an amortization schedule
    pub fn amortize(&self, inputs: &LoanInputs) -> Result<AmortizationResult, InvalidInput> {
        AmortizationCalculator::new().compute(inputs)
    }

    /// Compute a compound-interest growth projection
    pub fn project_growth(
        &self,
        inputs: &ProjectionInputs,
    ) -> Result<ProjectionResult, InvalidInput> {
        CompoundInterestProjector::new().compute(inputs)
    }

    /// Compute a progressive income-tax breakdown
    /// Clones the table set internally (small and cheap)
    pub fn income_tax(&self, inputs: &TaxInputs) -> Result<TaxResult, InvalidInput> {
        ProgressiveTaxCalculator::new(self.tables.clone()).compute(inputs)
    }

    /// Compute tax breakdowns for multiple input sets with the same tables
    pub fn income_tax_batch(
        &self,
        inputs: &[TaxInputs],
    ) -> Vec<Result<TaxResult, InvalidInput>> {
        let calculator = ProgressiveTaxCalculator::new(self.tables.clone());
        inputs.iter().map(|i| calculator.compute(i)).collect()
    }

    /// Get reference to the tables in use
    pub fn tables(&self) -> &TaxTables {
        &self.tables
    }

    /// Replace the table set wholesale (e.g. a new tax year)
    ///
    /// Requires `&mut self`: no calculation can observe a half-swapped
    /// table set.
    pub fn replace_tables(&mut self, tables: TaxTables) {
        self.tables = tables;
    }
}

impl Default for CalculatorSuite {
    fn default() -> Self {
        Self::new()
    }
}
