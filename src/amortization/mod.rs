//! Fixed-payment loan amortization

mod engine;
mod schedule;

pub use engine::{AmortizationCalculator, LoanInputs};
pub use schedule::{AmortizationEntry, AmortizationResult, ScheduleSummary};
