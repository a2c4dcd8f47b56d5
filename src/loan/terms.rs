//! Immutable loan terms with derived monthly values

use serde::Serialize;

use crate::amortization::{required_monthly_payment, theoretical_total_interest};
use crate::error::{MortgageError, MortgageResult};

/// Longest loan term accepted, in years
pub const MAX_TERM_YEARS: u32 = 1000;

/// Terms of a fixed-rate loan, fixed for the life of a simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanTerms {
    /// Original amount borrowed
    principal: f64,

    /// Nominal annual rate as a decimal (0.0375 = 3.75%)
    yearly_rate: f64,

    /// Loan duration in years
    term_years: u32,

    // Derived at construction
    monthly_rate: f64,
    term_months: u32,
    required_payment: f64,
}

impl LoanTerms {
    /// Validate inputs and derive monthly rate, term in months and the level payment
    pub fn new(principal: f64, yearly_rate: f64, term_years: u32) -> MortgageResult<Self> {
        if !principal.is_finite() || principal <= 0.0 {
            return Err(MortgageError::InvalidAmount { field: "principal", value: principal });
        }
        if !yearly_rate.is_finite() || yearly_rate < 0.0 || yearly_rate >= 1.0 {
            return Err(MortgageError::InvalidRate { rate: yearly_rate });
        }
        if term_years == 0 || term_years > MAX_TERM_YEARS {
            return Err(MortgageError::InvalidTerm { term_years });
        }
        let term_months = term_years * 12;

        let monthly_rate = yearly_rate / 12.0;
        let required_payment = required_monthly_payment(principal, monthly_rate, term_months)?;

        Ok(Self {
            principal,
            yearly_rate,
            term_years,
            monthly_rate,
            term_months,
            required_payment,
        })
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn yearly_rate(&self) -> f64 {
        self.yearly_rate
    }

    pub fn term_years(&self) -> u32 {
        self.term_years
    }

    pub fn monthly_rate(&self) -> f64 {
        self.monthly_rate
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    /// Contractual level payment
    pub fn required_payment(&self) -> f64 {
        self.required_payment
    }

    /// Interest over the full term when only the required payment is made
    pub fn theoretical_total_interest(&self) -> f64 {
        theoretical_total_interest(self.principal, self.required_payment, self.term_months)
    }
}
