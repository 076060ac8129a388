//! Balance series output for growth projections

use serde::{Deserialize, Serialize};

use crate::rounding::round_cents;

/// Balance at the start of a projection year
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectionEntry {
    /// Year offset from the start of the projection (0 = starting principal)
    pub year_index: u32,

    /// Balance at this point in time
    pub balance: f64,
}

/// Complete growth projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// One entry per year, ascending, from year 0 through the final year
    pub entries: Vec<ProjectionEntry>,

    /// Ending balance; always equals the final entry's balance
    pub future_value: f64,
}

impl ProjectionResult {
    /// Copy with balances rounded to cents (output boundary only)
    pub fn rounded(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|e| ProjectionEntry {
                    year_index: e.year_index,
                    balance: round_cents(e.balance),
                })
                .collect(),
            future_value: round_cents(self.future_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_balances() {
        let result = ProjectionResult {
            entries: vec![
                ProjectionEntry {
                    year_index: 0,
                    balance: 10_000.0,
                },
                ProjectionEntry {
                    year_index: 1,
                    balance: 16_049.999_999_999_8,
                },
            ],
            future_value: 16_049.999_999_999_8,
        };

        let rounded = result.rounded();
        assert_eq!(rounded.future_value, 16_050.0);
        assert_eq!(rounded.entries[1].balance, 16_050.0);
        assert_eq!(rounded.entries[1].year_index, 1);
    }
}
