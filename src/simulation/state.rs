//! Mutable loan state tracked across simulated months

use serde::Serialize;

use super::PaymentEvent;
use crate::loan::LoanTerms;

/// State of the loan after the most recent payment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanState {
    /// Number of payments applied so far (0 before the first payment)
    pub month: u32,

    /// Remaining principal
    pub balance: f64,

    /// Sum of interest portions applied so far
    pub cumulative_interest_paid: f64,
}

impl LoanState {
    /// Fresh state for a loan that has just been originated
    pub fn from_terms(terms: &LoanTerms) -> Self {
        Self::with_balance(terms.principal())
    }

    /// State with an arbitrary remaining balance and no payment history
    pub fn with_balance(balance: f64) -> Self {
        Self {
            month: 0,
            balance,
            cumulative_interest_paid: 0.0,
        }
    }

    /// Advance one month with an already-validated payment
    pub(crate) fn apply(&mut self, payment: &PaymentEvent) {
        self.month += 1;
        self.balance -= payment.principal_portion;
        self.cumulative_interest_paid += payment.interest_portion;
    }

    pub fn is_paid_off(&self) -> bool {
        self.balance <= 0.0
    }
}
