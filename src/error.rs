//! Error types for loan validation and simulation

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MortgageError {
    #[error("Invalid term: {term_years} years (must be between 1 and {max})", max = crate::loan::MAX_TERM_YEARS)]
    InvalidTerm { term_years: u32 },

    #[error("Invalid rate: {rate} (must be a decimal fraction in [0, 1))")]
    InvalidRate { rate: f64 },

    #[error("Invalid input: {field} = {value}")]
    InvalidAmount { field: &'static str, value: f64 },

    #[error("Payment principal {principal} exceeds remaining balance {balance}")]
    Overpayment { principal: f64, balance: f64 },

    #[error("Simulation did not pay off the loan after {months} months (remaining balance: {remaining_balance})")]
    NonTerminatingSimulation { months: u32, remaining_balance: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl From<csv::Error> for MortgageError {
    fn from(e: csv::Error) -> Self {
        MortgageError::Export(e.to_string())
    }
}

impl From<serde_json::Error> for MortgageError {
    fn from(e: serde_json::Error) -> Self {
        MortgageError::Config(e.to_string())
    }
}

impl From<std::io::Error> for MortgageError {
    fn from(e: std::io::Error) -> Self {
        MortgageError::Config(e.to_string())
    }
}

pub type MortgageResult<T> = Result<T, MortgageError>;
