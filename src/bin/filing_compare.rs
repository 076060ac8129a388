//! Compare tax breakdowns across filing statuses for a set of incomes
//!
//! Usage: cargo run --bin filing_compare

use finance_engine::{CalculatorSuite, FilingStatus, TaxInputs};
use std::fs::File;
use std::io::Write;

fn main() {
    env_logger::init();

    let incomes = vec![50_000.0, 100_000.0, 250_000.0];
    let suite = CalculatorSuite::new();

    let output_path = "filing_compare_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");
    writeln!(
        file,
        "Income,Status,TaxableIncome,FederalTax,FicaTax,StateTax,TotalTax,NetIncome"
    )
    .unwrap();

    for income in incomes {
        println!("\n{}", "=".repeat(64));
        println!("Gross income ${:.0} (5% flat state, no local)", income);
        println!("{}", "=".repeat(64));
        println!(
            "{:<26} {:>11} {:>11} {:>12}",
            "Status", "Federal", "Total", "Net"
        );

        for status in FilingStatus::ALL {
            let inputs = TaxInputs {
                gross_income: income,
                filing_status: status,
                state_rate_percent: 5.0,
                local_rate_percent: 0.0,
                pretax_deductions: 0.0,
            };
            let result = suite
                .income_tax(&inputs)
                .expect("compare inputs are valid")
                .rounded();

            println!(
                "{:<26} {:>11.2} {:>11.2} {:>12.2}",
                status.label(),
                result.federal_tax,
                result.total_tax,
                result.net_income,
            );

            writeln!(
                file,
                "{:.2},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
                income,
                status.key(),
                result.taxable_income,
                result.federal_tax,
                result.fica_tax,
                result.state_tax,
                result.total_tax,
                result.net_income,
            )
            .unwrap();
        }
    }

    println!("\nResults written to: {}", output_path);
}
