//! Federal marginal bracket tables by filing status

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;
use crate::tax::FilingStatus;

/// One marginal bracket: income up to `upper` taxed at `rate`.
/// `upper == None` marks the unbounded top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub upper: Option<f64>,
    /// Marginal rate as a fraction (0.22 = 22%)
    pub rate: f64,
}

/// Ordered, non-overlapping marginal brackets for one filing status,
/// terminated by a single unbounded bracket.
/// Only constructible through `new`, which enforces the structure.
#[derive(Debug, Clone)]
pub struct BracketSchedule {
    brackets: Vec<Bracket>,
}

impl BracketSchedule {
    /// Build a schedule, rejecting structurally invalid bracket sequences
    pub fn new(brackets: Vec<Bracket>) -> Result<Self, InvalidInput> {
        if brackets.is_empty() {
            return Err(InvalidInput::new(
                "brackets",
                "bracket schedule cannot be empty",
            ));
        }

        let mut lower = 0.0;
        for (idx, bracket) in brackets.iter().enumerate() {
            if bracket.rate < 0.0 {
                return Err(InvalidInput::new(
                    "brackets",
                    "marginal rate cannot be negative",
                ));
            }
            match bracket.upper {
                Some(upper) => {
                    if idx == brackets.len() - 1 {
                        return Err(InvalidInput::new(
                            "brackets",
                            "bracket schedule must end with an unbounded bracket",
                        ));
                    }
                    if upper <= lower {
                        return Err(InvalidInput::new(
                            "brackets",
                            "bracket upper bounds must be strictly ascending",
                        ));
                    }
                    lower = upper;
                }
                None => {
                    if idx != brackets.len() - 1 {
                        return Err(InvalidInput::new(
                            "brackets",
                            "only the final bracket may be unbounded",
                        ));
                    }
                }
            }
        }

        Ok(Self { brackets })
    }

    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }

    /// Total marginal-rate tax on a taxable amount.
    ///
    /// Walks the brackets in ascending order, taxing each income chunk at
    /// its own rate with no double counting.
    pub fn tax_on(&self, taxable: f64) -> f64 {
        let mut tax = 0.0;
        let mut remainder = taxable;
        let mut lower = 0.0;

        for bracket in &self.brackets {
            if remainder <= 0.0 {
                break;
            }
            let chunk = match bracket.upper {
                Some(upper) => remainder.min(upper - lower),
                None => remainder,
            };
            tax += chunk * bracket.rate;
            remainder -= chunk;
            match bracket.upper {
                Some(upper) => lower = upper,
                None => break,
            }
        }

        tax
    }
}

/// Bracket schedules keyed by filing status, versioned per tax year
#[derive(Debug, Clone)]
pub struct FederalBracketTable {
    schedules: HashMap<FilingStatus, BracketSchedule>,
}

impl FederalBracketTable {
    /// Build from pre-validated schedules
    pub fn from_schedules(schedules: Vec<(FilingStatus, BracketSchedule)>) -> Self {
        Self {
            schedules: schedules.into_iter().collect(),
        }
    }

    /// Create from loaded CSV rows, preserving per-status row order
    pub fn from_loaded(loaded: &super::loader::LoadedTables) -> Result<Self, InvalidInput> {
        let mut grouped: HashMap<FilingStatus, Vec<Bracket>> = HashMap::new();
        for &(status, upper, rate) in &loaded.federal_brackets {
            grouped
                .entry(status)
                .or_default()
                .push(Bracket { upper, rate });
        }

        let mut schedules = HashMap::new();
        for (status, brackets) in grouped {
            schedules.insert(status, BracketSchedule::new(brackets)?);
        }

        Ok(Self { schedules })
    }

    /// Official 2025 federal brackets
    pub fn year_2025() -> Self {
        let mut schedules = HashMap::new();
        schedules.insert(
            FilingStatus::Single,
            schedule_2025(
                &[
                    (11_925.0, 0.10),
                    (48_475.0, 0.12),
                    (103_350.0, 0.22),
                    (197_300.0, 0.24),
                    (250_525.0, 0.32),
                    (626_350.0, 0.35),
                ],
                0.37,
            ),
        );
        schedules.insert(
            FilingStatus::MarriedJoint,
            schedule_2025(
                &[
                    (23_850.0, 0.10),
                    (96_950.0, 0.12),
                    (206_700.0, 0.22),
                    (394_600.0, 0.24),
                    (501_050.0, 0.32),
                    (751_600.0, 0.35),
                ],
                0.37,
            ),
        );
        schedules.insert(
            FilingStatus::MarriedSeparate,
            schedule_2025(
                &[
                    (11_925.0, 0.10),
                    (48_475.0, 0.12),
                    (103_350.0, 0.22),
                    (197_300.0, 0.24),
                    (250_525.0, 0.32),
                    (375_800.0, 0.35),
                ],
                0.37,
            ),
        );
        schedules.insert(
            FilingStatus::HeadOfHousehold,
            schedule_2025(
                &[
                    (17_000.0, 0.10),
                    (64_850.0, 0.12),
                    (103_350.0, 0.22),
                    (197_300.0, 0.24),
                    (250_500.0, 0.32),
                    (626_350.0, 0.35),
                ],
                0.37,
            ),
        );

        Self { schedules }
    }

    /// Get the bracket schedule for a filing status
    pub fn schedule(&self, status: FilingStatus) -> Option<&BracketSchedule> {
        self.schedules.get(&status)
    }
}

fn schedule_2025(bounded: &[(f64, f64)], top_rate: f64) -> BracketSchedule {
    let mut brackets: Vec<Bracket> = bounded
        .iter()
        .map(|&(upper, rate)| Bracket {
            upper: Some(upper),
            rate,
        })
        .collect();
    brackets.push(Bracket {
        upper: None,
        rate: top_rate,
    });
    BracketSchedule::new(brackets).expect("built-in 2025 brackets are well-formed")
}
