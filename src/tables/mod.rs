//! Rate, bracket, and deduction tables
//!
//! Tables are versioned data, not logic: a new tax year is a new table set
//! (built-in or CSV), never an edit to the calculators.

mod brackets;
mod deductions;
mod states;
pub mod loader;

pub use brackets::{Bracket, BracketSchedule, FederalBracketTable};
pub use deductions::StandardDeductionTable;
pub use loader::LoadedTables;
pub use states::{StateRate, StateRateTable};

use std::error::Error;
use std::path::Path;

/// Default FICA rate: 6.2% Social Security + 1.45% Medicare
pub const DEFAULT_FICA_RATE: f64 = 0.0765;

/// Container for all tables used by the progressive tax calculator
#[derive(Debug, Clone)]
pub struct TaxTables {
    /// Tax year the tables describe
    pub tax_year: u16,
    pub federal: FederalBracketTable,
    pub deductions: StandardDeductionTable,
    pub state_rates: StateRateTable,
    /// Combined payroll rate applied to the taxable base
    pub fica_rate: f64,
}

impl TaxTables {
    /// Built-in table set for tax year 2025
    pub fn year_2025() -> Self {
        Self {
            tax_year: 2025,
            federal: FederalBracketTable::year_2025(),
            deductions: StandardDeductionTable::year_2025(),
            state_rates: StateRateTable::approx_2025(),
            fica_rate: DEFAULT_FICA_RATE,
        }
    }

    /// Load tables from CSV files in the default location (data/tables/)
    pub fn from_csv() -> Result<Self, Box<dyn Error>> {
        Self::from_csv_path(Path::new(loader::DEFAULT_TABLES_PATH))
    }

    /// Load tables from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let loaded = LoadedTables::load_from(path)?;

        Ok(Self {
            tax_year: loaded.meta.get("tax_year").map(|v| *v as u16).unwrap_or(2025),
            federal: FederalBracketTable::from_loaded(&loaded)?,
            deductions: StandardDeductionTable::from_loaded(&loaded),
            state_rates: StateRateTable::from_loaded(&loaded),
            fica_rate: loaded
                .meta
                .get("fica_rate")
                .copied()
                .unwrap_or(DEFAULT_FICA_RATE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::FilingStatus;

    #[test]
    fn test_csv_tables_match_builtin_2025() {
        let from_csv = TaxTables::from_csv().expect("shipped tables should load");
        let builtin = TaxTables::year_2025();

        assert_eq!(from_csv.tax_year, 2025);
        assert!((from_csv.fica_rate - builtin.fica_rate).abs() < 1e-12);

        for status in FilingStatus::ALL {
            assert_eq!(
                from_csv.deductions.amount(status),
                builtin.deductions.amount(status)
            );

            let a = from_csv.federal.schedule(status).unwrap();
            let b = builtin.federal.schedule(status).unwrap();
            assert_eq!(a.brackets().len(), b.brackets().len());
            // Same liability at a few probe incomes
            for taxable in [0.0, 11_925.0, 35_000.0, 250_000.0, 1_000_000.0] {
                assert!((a.tax_on(taxable) - b.tax_on(taxable)).abs() < 1e-6);
            }
        }

        assert_eq!(
            from_csv.state_rates.rate_percent("AZ"),
            builtin.state_rates.rate_percent("AZ")
        );
    }
}
