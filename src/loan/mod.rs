//! Loan inputs: borrower parameters and the validated terms derived from them

mod params;
mod terms;

pub use params::MortgageParams;
pub use terms::{LoanTerms, MAX_TERM_YEARS};
