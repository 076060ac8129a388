//! Schedule output structures for amortization

use serde::{Deserialize, Serialize};

use crate::rounding::round_cents;

/// A single month of an amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// Absolute month number (1-indexed)
    pub period_index: u32,

    /// Portion of the payment that reduces the balance
    pub principal_portion: f64,

    /// Portion of the payment that covers accrued interest
    pub interest_portion: f64,

    /// Running sum of principal paid through this month
    pub cumulative_principal: f64,

    /// Running sum of interest paid through this month
    pub cumulative_interest: f64,

    /// Balance remaining after this month's payment (floored at zero)
    pub remaining_balance: f64,
}

/// Complete amortization result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// Fixed monthly payment
    pub monthly_payment: f64,

    /// Monthly schedule rows in ascending period order
    pub entries: Vec<AmortizationEntry>,
}

impl AmortizationResult {
    pub fn new(monthly_payment: f64) -> Self {
        Self {
            monthly_payment,
            entries: Vec::new(),
        }
    }

    /// Add a schedule row
    pub fn add_entry(&mut self, entry: AmortizationEntry) {
        self.entries.push(entry);
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        let last = self.entries.last();

        ScheduleSummary {
            total_months: self.entries.len() as u32,
            total_principal: last.map(|e| e.cumulative_principal).unwrap_or(0.0),
            total_interest: last.map(|e| e.cumulative_interest).unwrap_or(0.0),
            final_balance: last.map(|e| e.remaining_balance).unwrap_or(0.0),
        }
    }

    /// Copy with every money field rounded to cents (output boundary only)
    pub fn rounded(&self) -> Self {
        Self {
            monthly_payment: round_cents(self.monthly_payment),
            entries: self
                .entries
                .iter()
                .map(|e| AmortizationEntry {
                    period_index: e.period_index,
                    principal_portion: round_cents(e.principal_portion),
                    interest_portion: round_cents(e.interest_portion),
                    cumulative_principal: round_cents(e.cumulative_principal),
                    cumulative_interest: round_cents(e.cumulative_interest),
                    remaining_balance: round_cents(e.remaining_balance),
                })
                .collect(),
        }
    }
}

/// Summary statistics for an amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_months: u32,
    pub total_principal: f64,
    pub total_interest: f64,
    pub final_balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(period_index: u32, principal: f64, interest: f64) -> AmortizationEntry {
        AmortizationEntry {
            period_index,
            principal_portion: principal,
            interest_portion: interest,
            cumulative_principal: principal * period_index as f64,
            cumulative_interest: interest * period_index as f64,
            remaining_balance: 1000.0 - principal * period_index as f64,
        }
    }

    #[test]
    fn test_summary_reads_last_entry() {
        let mut result = AmortizationResult::new(110.0);
        result.add_entry(entry(1, 100.0, 10.0));
        result.add_entry(entry(2, 100.0, 10.0));

        let summary = result.summary();
        assert_eq!(summary.total_months, 2);
        assert!((summary.total_principal - 200.0).abs() < 1e-10);
        assert!((summary.total_interest - 20.0).abs() < 1e-10);
        assert!((summary.final_balance - 800.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_empty_schedule() {
        let result = AmortizationResult::new(0.0);
        let summary = result.summary();
        assert_eq!(summary.total_months, 0);
        assert_eq!(summary.total_principal, 0.0);
    }

    #[test]
    fn test_rounded_touches_only_money_fields() {
        let mut result = AmortizationResult::new(1145.7995);
        result.add_entry(AmortizationEntry {
            period_index: 7,
            principal_portion: 345.7995,
            interest_portion: 800.0004,
            cumulative_principal: 2420.5967,
            cumulative_interest: 5600.0021,
            remaining_balance: 237579.4033,
        });

        let rounded = result.rounded();
        assert_eq!(rounded.monthly_payment, 1145.80);
        assert_eq!(rounded.entries[0].period_index, 7);
        assert_eq!(rounded.entries[0].principal_portion, 345.80);
        assert_eq!(rounded.entries[0].interest_portion, 800.00);
        assert_eq!(rounded.entries[0].cumulative_principal, 2420.60);
        assert_eq!(rounded.entries[0].remaining_balance, 237579.40);
    }
}
