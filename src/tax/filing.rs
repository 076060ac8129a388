//! Filing status selector shared by inputs and rate tables

use serde::{Deserialize, Serialize};

/// Federal filing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    MarriedJoint,
    MarriedSeparate,
    HeadOfHousehold,
}

impl FilingStatus {
    pub const ALL: [FilingStatus; 4] = [
        FilingStatus::Single,
        FilingStatus::MarriedJoint,
        FilingStatus::MarriedSeparate,
        FilingStatus::HeadOfHousehold,
    ];

    /// Stable key used in table files and CLI arguments
    pub fn key(&self) -> &'static str {
        match self {
            FilingStatus::Single => "single",
            FilingStatus::MarriedJoint => "married_joint",
            FilingStatus::MarriedSeparate => "married_separate",
            FilingStatus::HeadOfHousehold => "head_of_household",
        }
    }

    /// Parse a table/CLI key back into a status
    pub fn parse_key(key: &str) -> Option<FilingStatus> {
        match key.trim().to_ascii_lowercase().as_str() {
            "single" => Some(FilingStatus::Single),
            "married_joint" => Some(FilingStatus::MarriedJoint),
            "married_separate" => Some(FilingStatus::MarriedSeparate),
            "head_of_household" => Some(FilingStatus::HeadOfHousehold),
            _ => None,
        }
    }

    /// Display label for console output
    pub fn label(&self) -> &'static str {
        match self {
            FilingStatus::Single => "Single",
            FilingStatus::MarriedJoint => "Married Filing Jointly",
            FilingStatus::MarriedSeparate => "Married Filing Separately",
            FilingStatus::HeadOfHousehold => "Head of Household",
        }
    }
}
