//! Stateless amortization math

mod formulas;

pub use formulas::{
    interest_for_period, mortgage_principal, required_monthly_payment, theoretical_total_interest,
};
