//! Sweep amortization costs across an interest-rate grid
//!
//! Outputs monthly payment and lifetime interest per rate for comparison

use finance_engine::{AmortizationCalculator, LoanInputs};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn main() {
    env_logger::init();

    let start = Instant::now();

    // 240k loan over 30 years, rates from 0% to 12% in eighth-point steps
    let base = LoanInputs {
        home_price: 300_000.0,
        down_payment: 60_000.0,
        term_years: 30,
        annual_rate_percent: 0.0,
    };
    let rates: Vec<f64> = (0..=96).map(|step| step as f64 * 0.125).collect();

    println!("Sweeping {} rates...", rates.len());

    let calculator = AmortizationCalculator::new();
    let results: Vec<(f64, f64, f64)> = rates
        .par_iter()
        .map(|&rate| {
            let inputs = LoanInputs {
                annual_rate_percent: rate,
                ..base.clone()
            };
            let result = calculator.compute(&inputs).expect("sweep inputs are valid");
            let summary = result.summary();
            (rate, result.monthly_payment, summary.total_interest)
        })
        .collect();

    println!("Sweep complete in {:?}", start.elapsed());

    // Write output
    let output_path = "rate_sweep_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");
    writeln!(file, "Rate,MonthlyPayment,TotalInterest").unwrap();
    for (rate, payment, total_interest) in &results {
        writeln!(file, "{:.3},{:.2},{:.2}", rate, payment, total_interest).unwrap();
    }

    println!("Results written to: {}", output_path);

    // Console preview at whole-point rates
    println!("\n{:>7} {:>14} {:>16}", "Rate", "Payment", "TotalInterest");
    println!("{}", "-".repeat(39));
    for (rate, payment, total_interest) in results.iter().filter(|(r, _, _)| r.fract() == 0.0) {
        println!("{:>6.2}% {:>14.2} {:>16.2}", rate, payment, total_interest);
    }
}
