//! Mortgage input parameters as supplied by the borrower

use serde::{Deserialize, Serialize};

use super::terms::MAX_TERM_YEARS;
use super::LoanTerms;
use crate::amortization::mortgage_principal;
use crate::error::{MortgageError, MortgageResult};
use crate::simulation::ExtraPaymentPolicy;

fn default_home_value() -> f64 { 500_000.0 }
fn default_down_payment_pct() -> f64 { 0.20 }
fn default_yearly_interest_rate() -> f64 { 0.0375 }
fn default_term_years() -> u32 { 30 }

/// Parameter record for one mortgage simulation.
///
/// Every field has a default, so a JSON document only needs the values that differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageParams {
    /// Purchase price of the home
    #[serde(default = "default_home_value")]
    pub home_value: f64,

    /// Down payment as a fraction of home value, in [0, 1)
    #[serde(default = "default_down_payment_pct")]
    pub down_payment_pct: f64,

    /// Nominal annual rate as a decimal, in [0, 1)
    #[serde(default = "default_yearly_interest_rate")]
    pub yearly_interest_rate: f64,

    /// Loan duration in years
    #[serde(default = "default_term_years")]
    pub term_years: u32,

    /// Extra principal paid every month
    #[serde(default)]
    pub monthly_extra_payment: f64,

    /// Extra principal paid in months divisible by 12
    #[serde(default)]
    pub annual_extra_payment: f64,
}

impl Default for MortgageParams {
    fn default() -> Self {
        Self {
            home_value: default_home_value(),
            down_payment_pct: default_down_payment_pct(),
            yearly_interest_rate: default_yearly_interest_rate(),
            term_years: default_term_years(),
            monthly_extra_payment: 0.0,
            annual_extra_payment: 0.0,
        }
    }
}

impl MortgageParams {
    /// Amount financed: home value less the down payment
    pub fn mortgage_principal(&self) -> f64 {
        mortgage_principal(self.home_value, self.down_payment_pct)
    }

    /// Check every field against its allowed range
    pub fn validate(&self) -> MortgageResult<()> {
        if !self.home_value.is_finite() || self.home_value <= 0.0 {
            return Err(MortgageError::InvalidAmount { field: "home_value", value: self.home_value });
        }
        if !(0.0..1.0).contains(&self.down_payment_pct) {
            return Err(MortgageError::InvalidAmount {
                field: "down_payment_pct",
                value: self.down_payment_pct,
            });
        }
        if !self.yearly_interest_rate.is_finite()
            || !(0.0..1.0).contains(&self.yearly_interest_rate)
        {
            return Err(MortgageError::InvalidRate { rate: self.yearly_interest_rate });
        }
        if self.term_years == 0 || self.term_years > MAX_TERM_YEARS {
            return Err(MortgageError::InvalidTerm { term_years: self.term_years });
        }
        self.extra_payment_policy()?;
        Ok(())
    }

    /// Validated loan terms for the financed amount
    pub fn loan_terms(&self) -> MortgageResult<LoanTerms> {
        self.validate()?;
        LoanTerms::new(self.mortgage_principal(), self.yearly_interest_rate, self.term_years)
    }

    /// Extra-payment schedule described by these parameters
    pub fn extra_payment_policy(&self) -> MortgageResult<ExtraPaymentPolicy> {
        ExtraPaymentPolicy::new(self.monthly_extra_payment, self.annual_extra_payment)
    }

    /// Parse parameters from a JSON document
    pub fn from_json_str(json: &str) -> MortgageResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse parameters from any JSON reader (file, stdin, buffer)
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> MortgageResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load parameters from a JSON file
    pub fn from_json_file<P: AsRef<std::path::Path>>(path: P) -> MortgageResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }
}
