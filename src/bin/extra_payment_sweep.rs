//! Compare payoff time and interest across a range of monthly extra payments
//!
//! Usage: cargo run --bin extra_payment_sweep -- [--params file.json] [--step 250] [--count 5]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mortgage_simulator::{ExtraPaymentPolicy, MonthSpan, MortgageParams, ScenarioRunner, SimulationConfig};

#[derive(Debug, Parser)]
#[command(name = "extra_payment_sweep", about = "Sweep monthly extra payments for one mortgage")]
struct Args {
    /// JSON file with mortgage parameters (defaults otherwise)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Increment between monthly extra payment levels
    #[arg(long, default_value_t = 250.0)]
    step: f64,

    /// Number of levels, starting at zero
    #[arg(long, default_value_t = 5)]
    count: u32,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let params = match &args.params {
        Some(path) => MortgageParams::from_json_file(path)
            .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
        None => MortgageParams::default(),
    };
    let terms = params.loan_terms().context("Invalid mortgage parameters")?;

    let policies = (0..args.count)
        .map(|i| ExtraPaymentPolicy::new(args.step * i as f64, params.annual_extra_payment))
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid extra payment level")?;

    // Totals only; per-month rows are not needed here
    let runner = ScenarioRunner::with_config(SimulationConfig {
        record_schedule: false,
        ..Default::default()
    });
    let results = runner.run_scenarios(&terms, &policies)?;

    println!(
        "Principal {:.2} at {:.3}% over {} years, required payment {:.2}",
        terms.principal(),
        terms.yearly_rate() * 100.0,
        terms.term_years(),
        terms.required_payment()
    );
    println!("{:>12} {:>8} {:>26} {:>14} {:>14}", "MonthlyExtra", "Months", "Payoff", "Interest", "Saved");
    println!("{}", "-".repeat(78));

    for (policy, result) in policies.iter().zip(&results) {
        println!(
            "{:>12.2} {:>8} {:>26} {:>14.2} {:>14.2}",
            policy.monthly(),
            result.months_to_payoff,
            MonthSpan(result.months_to_payoff).to_string(),
            result.actual_interest,
            result.interest_saved.unwrap_or(0.0),
        );
    }

    Ok(())
}
