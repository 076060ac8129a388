//! Approximate flat state income-tax rates
//!
//! Lookup data for callers that let a user pick a state instead of typing a
//! rate; the tax calculator itself only ever sees the resolved percent.

use serde::{Deserialize, Serialize};

/// One state's approximate flat rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateRate {
    /// Two-letter postal code
    pub code: String,
    pub name: String,
    /// Flat income-tax rate in percent
    pub rate_percent: f64,
}

/// State rate lookup table
#[derive(Debug, Clone)]
pub struct StateRateTable {
    states: Vec<StateRate>,
}

// Approximate per-state rates; flat-tax stand-ins for states with their own
// progressive schedules.
const APPROX_2025: &[(&str, &str, f64)] = &[
    ("AL", "Alabama", 5.0),
    ("AK", "Alaska", 0.0),
    ("AZ", "Arizona", 4.5),
    ("AR", "Arkansas", 4.4),
    ("CA", "California", 9.3),
    ("CO", "Colorado", 4.4),
    ("CT", "Connecticut", 5.5),
    ("DE", "Delaware", 5.5),
    ("FL", "Florida", 0.0),
    ("GA", "Georgia", 5.39),
    ("HI", "Hawaii", 7.9),
    ("ID", "Idaho", 5.8),
    ("IL", "Illinois", 4.95),
    ("IN", "Indiana", 3.05),
    ("IA", "Iowa", 5.7),
    ("KS", "Kansas", 5.2),
    ("KY", "Kentucky", 4.0),
    ("LA", "Louisiana", 4.25),
    ("ME", "Maine", 7.15),
    ("MD", "Maryland", 4.75),
    ("MA", "Massachusetts", 5.0),
    ("MI", "Michigan", 4.25),
    ("MN", "Minnesota", 7.85),
    ("MS", "Mississippi", 4.7),
    ("MO", "Missouri", 4.8),
    ("MT", "Montana", 5.9),
    ("NE", "Nebraska", 5.84),
    ("NV", "Nevada", 0.0),
    ("NH", "New Hampshire", 0.0),
    ("NJ", "New Jersey", 5.53),
    ("NM", "New Mexico", 4.9),
    ("NY", "New York", 6.5),
    ("NC", "North Carolina", 4.5),
    ("ND", "North Dakota", 2.5),
    ("OH", "Ohio", 3.5),
    ("OK", "Oklahoma", 4.75),
    ("OR", "Oregon", 8.75),
    ("PA", "Pennsylvania", 3.07),
    ("RI", "Rhode Island", 4.75),
    ("SC", "South Carolina", 6.2),
    ("SD", "South Dakota", 0.0),
    ("TN", "Tennessee", 0.0),
    ("TX", "Texas", 0.0),
    ("UT", "Utah", 4.65),
    ("VT", "Vermont", 6.6),
    ("VA", "Virginia", 5.75),
    ("WA", "Washington", 0.0),
    ("WV", "West Virginia", 5.12),
    ("WI", "Wisconsin", 5.3),
    ("WY", "Wyoming", 0.0),
    ("DC", "District of Columbia", 8.95),
];

impl StateRateTable {
    /// Create from loaded CSV data
    pub fn from_loaded(loaded: &super::loader::LoadedTables) -> Self {
        Self {
            states: loaded
                .state_rates
                .iter()
                .map(|(code, name, rate_percent)| StateRate {
                    code: code.clone(),
                    name: name.clone(),
                    rate_percent: *rate_percent,
                })
                .collect(),
        }
    }

    /// Built-in approximate rates (50 states + DC)
    pub fn approx_2025() -> Self {
        Self {
            states: APPROX_2025
                .iter()
                .map(|&(code, name, rate_percent)| StateRate {
                    code: code.to_string(),
                    name: name.to_string(),
                    rate_percent,
                })
                .collect(),
        }
    }

    /// Look up a state by postal code (case-insensitive)
    pub fn get(&self, code: &str) -> Option<&StateRate> {
        self.states
            .iter()
            .find(|s| s.code.eq_ignore_ascii_case(code.trim()))
    }

    /// Resolve a postal code to its flat rate in percent
    pub fn rate_percent(&self, code: &str) -> Option<f64> {
        self.get(code).map(|s| s.rate_percent)
    }

    /// All states in table order
    pub fn states(&self) -> &[StateRate] {
        &self.states
    }
}
