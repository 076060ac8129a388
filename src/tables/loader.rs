//! CSV-based table loader
//!
//! Loads bracket, deduction, and state-rate tables from CSV files in
//! data/tables/

use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::path::Path;

use crate::tax::FilingStatus;

/// Default path to the tables directory
pub const DEFAULT_TABLES_PATH: &str = "data/tables";

/// Load federal brackets from CSV
/// Returns (status, upper bound, marginal rate) rows in file order;
/// an empty upper-bound field marks the unbounded top bracket
pub fn load_federal_brackets(
    path: &Path,
) -> Result<Vec<(FilingStatus, Option<f64>, f64)>, Box<dyn Error>> {
    let file = File::open(path.join("federal_brackets.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let status = FilingStatus::parse_key(&record[0])
            .ok_or_else(|| format!("unknown filing status: {}", &record[0]))?;
        let upper_field = record[1].trim();
        let upper = if upper_field.is_empty() {
            None
        } else {
            Some(upper_field.parse::<f64>()?)
        };
        let rate: f64 = record[2].parse()?;
        rows.push((status, upper, rate));
    }

    Ok(rows)
}

/// Load standard deductions from CSV
/// Returns HashMap<status, amount>
pub fn load_standard_deductions(
    path: &Path,
) -> Result<HashMap<FilingStatus, f64>, Box<dyn Error>> {
    let file = File::open(path.join("standard_deductions.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut amounts = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let status = FilingStatus::parse_key(&record[0])
            .ok_or_else(|| format!("unknown filing status: {}", &record[0]))?;
        let amount: f64 = record[1].parse()?;
        amounts.insert(status, amount);
    }

    Ok(amounts)
}

/// Load state rates from CSV
/// Returns (code, name, rate percent) rows
pub fn load_state_rates(path: &Path) -> Result<Vec<(String, String, f64)>, Box<dyn Error>> {
    let file = File::open(path.join("state_rates.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let code = record[0].trim().to_string();
        let name = record[1].trim().to_string();
        let rate: f64 = record[2].parse()?;
        rows.push((code, name, rate));
    }

    Ok(rows)
}

/// Load the key/value meta table (tax_year, fica_rate)
/// Returns HashMap<key, value>
pub fn load_meta(path: &Path) -> Result<HashMap<String, f64>, Box<dyn Error>> {
    let file = File::open(path.join("meta.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut values = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let key = record[0].to_string();
        let value: f64 = record[1].parse()?;
        values.insert(key, value);
    }

    Ok(values)
}

/// All table files loaded from one directory
pub struct LoadedTables {
    pub federal_brackets: Vec<(FilingStatus, Option<f64>, f64)>,
    pub standard_deductions: HashMap<FilingStatus, f64>,
    pub state_rates: Vec<(String, String, f64)>,
    pub meta: HashMap<String, f64>,
}

impl LoadedTables {
    /// Load all tables from the default path
    pub fn load_default() -> Result<Self, Box<dyn Error>> {
        Self::load_from(Path::new(DEFAULT_TABLES_PATH))
    }

    /// Load all tables from a specific path
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        let loaded = Self {
            federal_brackets: load_federal_brackets(path)?,
            standard_deductions: load_standard_deductions(path)?,
            state_rates: load_state_rates(path)?,
            meta: load_meta(path)?,
        };

        log::debug!(
            "loaded tables from {}: {} bracket rows, {} deductions, {} states",
            path.display(),
            loaded.federal_brackets.len(),
            loaded.standard_deductions.len(),
            loaded.state_rates.len(),
        );

        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_tables() {
        let result = LoadedTables::load_default();
        assert!(result.is_ok(), "Failed to load tables: {:?}", result.err());

        let tables = result.unwrap();

        // 7 brackets for each of the 4 statuses
        assert_eq!(tables.federal_brackets.len(), 28);
        // One unbounded terminator per status
        assert_eq!(
            tables
                .federal_brackets
                .iter()
                .filter(|(_, upper, _)| upper.is_none())
                .count(),
            4
        );

        assert_eq!(tables.standard_deductions.len(), 4);
        assert_eq!(
            tables.standard_deductions.get(&FilingStatus::Single),
            Some(&15_000.0)
        );

        assert_eq!(tables.state_rates.len(), 51);

        assert_eq!(tables.meta.get("tax_year"), Some(&2025.0));
        assert_eq!(tables.meta.get("fica_rate"), Some(&0.0765));
    }
}
