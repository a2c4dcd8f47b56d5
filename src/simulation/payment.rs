//! A single monthly payment split into principal and interest

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentEvent {
    /// Part of the payment that reduces the balance
    pub principal_portion: f64,

    /// Part of the payment that compensates the lender for the period
    pub interest_portion: f64,
}

impl PaymentEvent {
    pub fn new(principal_portion: f64, interest_portion: f64) -> Self {
        Self { principal_portion, interest_portion }
    }

    pub fn total(&self) -> f64 {
        self.principal_portion + self.interest_portion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_portions() {
        let payment = PaymentEvent::new(602.46, 1250.0);
        assert_eq!(payment.total(), 602.46 + 1250.0);
    }
}
