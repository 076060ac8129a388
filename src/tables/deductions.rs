//! Standard deduction amounts by filing status

use std::collections::HashMap;

use crate::tax::FilingStatus;

/// Standard deduction table, versioned per tax year
#[derive(Debug, Clone)]
pub struct StandardDeductionTable {
    amounts: HashMap<FilingStatus, f64>,
}

impl StandardDeductionTable {
    /// Create from loaded CSV data
    pub fn from_loaded(loaded: &super::loader::LoadedTables) -> Self {
        Self {
            amounts: loaded.standard_deductions.clone(),
        }
    }

    /// Official 2025 standard deductions
    pub fn year_2025() -> Self {
        let mut amounts = HashMap::new();
        amounts.insert(FilingStatus::Single, 15_000.0);
        amounts.insert(FilingStatus::MarriedJoint, 30_000.0);
        amounts.insert(FilingStatus::MarriedSeparate, 15_000.0);
        amounts.insert(FilingStatus::HeadOfHousehold, 22_500.0);
        Self { amounts }
    }

    /// Get the deduction for a filing status
    pub fn amount(&self, status: FilingStatus) -> Option<f64> {
        self.amounts.get(&status).copied()
    }
}
