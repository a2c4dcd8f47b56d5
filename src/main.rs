//! Mortgage Simulator CLI
//!
//! Collects loan parameters, runs the amortization and prints the schedule

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mortgage_simulator::{MortgageParams, MortgageReport, ScenarioRunner, SimulationConfig};

#[derive(Debug, Parser)]
#[command(name = "mortgage_simulator", version, about = "Simulate a fixed-rate mortgage with extra payments")]
struct Cli {
    /// JSON file with mortgage parameters (flags below override it)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Purchase price of the home
    #[arg(long)]
    home_value: Option<f64>,

    /// Down payment as a decimal fraction (0.20 = 20%)
    #[arg(long)]
    down_payment: Option<f64>,

    /// Yearly interest rate as a decimal fraction (0.0375 = 3.75%)
    #[arg(long)]
    rate: Option<f64>,

    /// Loan term in years
    #[arg(long)]
    years: Option<u32>,

    /// Extra principal paid every month
    #[arg(long)]
    monthly_extra: Option<f64>,

    /// Extra principal paid every twelfth month
    #[arg(long)]
    annual_extra: Option<f64>,

    /// Write the schedule as CSV to stdout instead of the narrative report
    #[arg(long)]
    csv: bool,

    /// Print the summary only, without a line per month
    #[arg(long, short)]
    quiet: bool,
}

impl Cli {
    fn mortgage_params(&self) -> Result<MortgageParams> {
        let mut params = match &self.params {
            Some(path) => MortgageParams::from_json_file(path)
                .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
            None => MortgageParams::default(),
        };

        if let Some(v) = self.home_value { params.home_value = v; }
        if let Some(v) = self.down_payment { params.down_payment_pct = v; }
        if let Some(v) = self.rate { params.yearly_interest_rate = v; }
        if let Some(v) = self.years { params.term_years = v; }
        if let Some(v) = self.monthly_extra { params.monthly_extra_payment = v; }
        if let Some(v) = self.annual_extra { params.annual_extra_payment = v; }

        Ok(params)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let params = cli.mortgage_params()?;

    let config = SimulationConfig {
        record_schedule: cli.csv || !cli.quiet,
        ..Default::default()
    };
    let report = ScenarioRunner::with_config(config)
        .run_params(&params)
        .context("Mortgage simulation failed")?;

    if cli.csv {
        report
            .schedule
            .write_csv(io::stdout().lock())
            .context("Failed to write CSV schedule")?;
    } else {
        print_report(&report, cli.quiet);
    }

    Ok(())
}

fn print_report(report: &MortgageReport, quiet: bool) {
    let params = &report.params;
    let terms = &report.terms;

    println!(
        "For a {} home, with a {} down payment, your mortgage amount will be: {}\n",
        currency(params.home_value),
        percent(params.down_payment_pct),
        currency(terms.principal()),
    );
    println!(
        "At {} over {} years, your monthly payment will be {}\n",
        percent(terms.yearly_rate()),
        terms.term_years(),
        currency(terms.required_payment()),
    );
    println!(
        "Your total interest paid (if you pay only the required payment) will be {}\n",
        currency(terms.theoretical_total_interest()),
    );

    if !quiet {
        for row in &report.schedule.rows {
            println!(
                "Payment: {} + {} = {}",
                currency(row.principal),
                currency(row.interest),
                currency(row.total_payment),
            );
            println!("{} --- Balance is {}\n", row.elapsed, currency(row.balance));
        }
    }

    let comparison = &report.comparison;
    println!(
        "Paid off in {}. Your total interest paid is {}\n",
        comparison.payoff_label(),
        currency(comparison.actual_interest),
    );

    if let Some(saved) = comparison.interest_saved {
        println!("You saved {} in interest with those extra payments\n", currency(saved));
    }
}

/// Dollar amount with thousands separators, e.g. `$1,852.46`
fn currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Decimal fraction as a percentage, trimming trailing zeros
fn percent(value: f64) -> String {
    let formatted = format!("{:.3}", value * 100.0);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0%".to_string()
    } else {
        format!("{}%", trimmed)
    }
}
