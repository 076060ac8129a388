//! Finance Engine CLI
//!
//! Command-line interface for running the calculators against the built-in
//! or CSV-loaded tables

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};

use finance_engine::{
    AmortizationResult, CalculatorSuite, ContributionTiming, FilingStatus, LoanInputs,
    ProjectionInputs, TaxInputs,
};

#[derive(Parser)]
#[command(
    name = "finance-engine",
    version,
    about = "Deterministic personal-finance calculators"
)]
struct Cli {
    /// Directory of CSV tables (defaults to the built-in 2025 tables)
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    /// Emit the result as JSON instead of a console table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fixed-payment amortization schedule
    Amortize {
        #[arg(long)]
        home_price: f64,

        #[arg(long, default_value_t = 0.0)]
        down_payment: f64,

        #[arg(long)]
        term_years: u32,

        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,

        /// Write the full schedule to this CSV file
        #[arg(long)]
        csv_out: Option<PathBuf>,
    },

    /// Compound-interest growth projection
    Grow {
        #[arg(long)]
        principal: f64,

        /// Total contributed per year
        #[arg(long, default_value_t = 0.0)]
        contribution: f64,

        #[arg(long)]
        years: u32,

        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,

        /// Compounding periods per year
        #[arg(long, default_value_t = 1)]
        compounds: u32,

        /// "start" adds contributions before each compounding step, "end" after
        #[arg(long, default_value = "start")]
        timing: String,
    },

    /// Progressive income-tax breakdown
    Tax {
        #[arg(long)]
        income: f64,

        /// Filing status: single, married_joint, married_separate, head_of_household
        #[arg(long, default_value = "single")]
        status: String,

        /// Two-letter state code, resolved against the state rate table
        #[arg(long)]
        state: Option<String>,

        /// Flat state rate in percent (overrides --state)
        #[arg(long)]
        state_rate: Option<f64>,

        /// Flat local rate in percent
        #[arg(long, default_value_t = 0.0)]
        local_rate: f64,

        /// Sum of pre-tax deductions (401k, HSA, other)
        #[arg(long, default_value_t = 0.0)]
        deductions: f64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let suite = match &cli.tables {
        Some(dir) => CalculatorSuite::from_csv_path(dir)
            .map_err(|e| anyhow!("failed to load tables from {}: {e}", dir.display()))?,
        None => CalculatorSuite::new(),
    };

    match cli.command {
        Command::Amortize {
            home_price,
            down_payment,
            term_years,
            rate,
            csv_out,
        } => {
            let inputs = LoanInputs {
                home_price,
                down_payment,
                term_years,
                annual_rate_percent: rate,
            };
            let result = suite.amortize(&inputs)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result.rounded())?);
                return Ok(());
            }

            println!(
                "Loan: ${:.2} at {:.3}% over {} months",
                inputs.loan_amount(),
                rate,
                term_years * 12
            );
            println!("Monthly payment: ${:.2}\n", result.monthly_payment);

            println!(
                "{:>5} {:>12} {:>12} {:>14} {:>14} {:>14}",
                "Month", "Principal", "Interest", "CumPrincipal", "CumInterest", "Balance"
            );
            println!("{}", "-".repeat(76));

            // First 24 months to console; the CSV carries the rest
            for entry in result.entries.iter().take(24) {
                println!(
                    "{:>5} {:>12.2} {:>12.2} {:>14.2} {:>14.2} {:>14.2}",
                    entry.period_index,
                    entry.principal_portion,
                    entry.interest_portion,
                    entry.cumulative_principal,
                    entry.cumulative_interest,
                    entry.remaining_balance,
                );
            }
            if result.entries.len() > 24 {
                println!("... ({} more months)", result.entries.len() - 24);
            }

            let summary = result.summary();
            println!("\nSummary:");
            println!("  Total Months: {}", summary.total_months);
            println!("  Total Principal: ${:.2}", summary.total_principal);
            println!("  Total Interest: ${:.2}", summary.total_interest);
            println!("  Final Balance: ${:.2}", summary.final_balance);

            if let Some(path) = csv_out {
                write_schedule_csv(&path, &result)?;
                println!("\nFull schedule written to: {}", path.display());
            }
        }

        Command::Grow {
            principal,
            contribution,
            years,
            rate,
            compounds,
            timing,
        } => {
            let timing = match timing.as_str() {
                "start" | "before" => ContributionTiming::BeforeCompounding,
                "end" | "after" => ContributionTiming::AfterCompounding,
                other => bail!("unknown timing `{other}` (expected start or end)"),
            };
            let inputs = ProjectionInputs {
                principal,
                annual_contribution: contribution,
                years,
                annual_rate_percent: rate,
                compounds_per_year: compounds,
                timing,
            };
            let result = suite.project_growth(&inputs)?.rounded();

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!("{:>5} {:>16}", "Year", "Balance");
            println!("{}", "-".repeat(22));
            for entry in &result.entries {
                println!("{:>5} {:>16.2}", entry.year_index, entry.balance);
            }

            println!("\nFuture value: ${:.2}", result.future_value);
        }

        Command::Tax {
            income,
            status,
            state,
            state_rate,
            local_rate,
            deductions,
        } => {
            let filing_status = FilingStatus::parse_key(&status)
                .ok_or_else(|| anyhow!("unknown filing status `{status}`"))?;

            let state_rate_percent = match (state_rate, &state) {
                (Some(rate), _) => rate,
                (None, Some(code)) => suite
                    .tables()
                    .state_rates
                    .rate_percent(code)
                    .ok_or_else(|| anyhow!("unknown state code `{code}`"))?,
                (None, None) => bail!("either --state or --state-rate is required"),
            };

            let inputs = TaxInputs {
                gross_income: income,
                filing_status,
                state_rate_percent,
                local_rate_percent: local_rate,
                pretax_deductions: deductions,
            };
            let result = suite.income_tax(&inputs)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result.rounded())?);
                return Ok(());
            }

            let r = result.rounded();
            println!(
                "{} income taxes, {}",
                suite.tables().tax_year,
                filing_status.label()
            );
            println!("\n{:<10} {:>10} {:>14}", "Tax", "Rate", "Amount");
            println!("{}", "-".repeat(36));
            println!(
                "{:<10} {:>9.2}% {:>14.2}",
                "Federal", r.effective_federal_rate_percent, r.federal_tax
            );
            println!(
                "{:<10} {:>9.2}% {:>14.2}",
                "FICA",
                suite.tables().fica_rate * 100.0,
                r.fica_tax
            );
            println!(
                "{:<10} {:>9.2}% {:>14.2}",
                "State", state_rate_percent, r.state_tax
            );
            println!("{:<10} {:>9.2}% {:>14.2}", "Local", local_rate, r.local_tax);
            println!("{:<10} {:>10} {:>14.2}", "Total", "", r.total_tax);

            println!("\nTaxable income: ${:.2}", r.taxable_income);
            println!("Income after taxes: ${:.2}", r.net_income);
        }
    }

    Ok(())
}

/// Write the rounded schedule as CSV for the rendering layer
fn write_schedule_csv(path: &Path, result: &AmortizationResult) -> anyhow::Result<()> {
    let rounded = result.rounded();
    let mut file = File::create(path)
        .with_context(|| format!("unable to create {}", path.display()))?;

    writeln!(
        file,
        "Month,Principal,Interest,CumulativePrincipal,CumulativeInterest,RemainingBalance"
    )?;
    for entry in &rounded.entries {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2}",
            entry.period_index,
            entry.principal_portion,
            entry.interest_portion,
            entry.cumulative_principal,
            entry.cumulative_interest,
            entry.remaining_balance,
        )?;
    }

    Ok(())
}
