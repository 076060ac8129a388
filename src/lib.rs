//! Finance Engine - deterministic calculators for personal-finance projections
//!
//! This library provides:
//! - Fixed-payment loan amortization with full monthly schedules
//! - Compound-interest growth projections with recurring contributions
//! - Progressive income-tax breakdowns (federal brackets, FICA, state, local)
//! - Swappable rate/bracket/deduction tables (built-in defaults or CSV)

pub mod amortization;
pub mod error;
pub mod growth;
pub mod rounding;
pub mod suite;
pub mod tables;
pub mod tax;

// Re-export commonly used types
pub use amortization::{AmortizationCalculator, AmortizationEntry, AmortizationResult, LoanInputs};
pub use error::InvalidInput;
pub use growth::{
    CompoundInterestProjector, ContributionTiming, ProjectionEntry, ProjectionInputs,
    ProjectionResult,
};
pub use suite::CalculatorSuite;
pub use tables::TaxTables;
pub use tax::{FilingStatus, ProgressiveTaxCalculator, TaxInputs, TaxResult};
