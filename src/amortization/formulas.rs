//! Closed-form annuity formulas for level-payment loans

use crate::error::{MortgageError, MortgageResult};

/// Level monthly payment that fully amortizes `principal` over `term_months`.
///
/// Standard annuity formula:
/// `M = P * i(1+i)^n / ((1+i)^n - 1)`
///
/// A zero monthly rate degenerates to flat amortization, `P / n`.
///
/// # Arguments
/// * `principal` - Amount borrowed
/// * `monthly_rate` - Periodic rate as a decimal (yearly rate / 12)
/// * `term_months` - Number of monthly payments
pub fn required_monthly_payment(principal: f64, monthly_rate: f64, term_months: u32) -> MortgageResult<f64> {
    if term_months == 0 {
        return Err(MortgageError::InvalidTerm { term_years: 0 });
    }

    let payment = if monthly_rate == 0.0 {
        principal / term_months as f64
    } else {
        // (1+i)^n via ln_1p/exp_m1 keeps small rates exact to the last bits
        let exponent = term_months as f64 * monthly_rate.ln_1p();
        principal * monthly_rate * exponent.exp() / exponent.exp_m1()
    };

    // (1+i)^n overflows for very long terms
    if !payment.is_finite() || payment <= 0.0 {
        return Err(MortgageError::InvalidTerm { term_years: term_months / 12 });
    }
    Ok(payment)
}

/// Total interest paid when only the required payment is made for the full term.
/// Baseline for measuring savings from extra payments.
pub fn theoretical_total_interest(principal: f64, monthly_payment: f64, term_months: u32) -> f64 {
    monthly_payment * term_months as f64 - principal
}

/// Interest accrued on `balance` over one period
pub fn interest_for_period(balance: f64, monthly_rate: f64) -> f64 {
    balance * monthly_rate
}

/// Amount financed after the down payment
pub fn mortgage_principal(home_value: f64, down_payment_pct: f64) -> f64 {
    home_value * (1.0 - down_payment_pct)
}
