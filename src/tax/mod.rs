//! Progressive income-tax calculation

mod breakdown;
mod engine;
mod filing;

pub use breakdown::TaxResult;
pub use engine::{ProgressiveTaxCalculator, TaxInputs};
pub use filing::FilingStatus;
