//! Mortgage Simulator - fixed-rate amortization with extra principal payments
//!
//! This library provides:
//! - Level-payment annuity formulas (with flat amortization at a zero rate)
//! - A month-by-month simulator with monthly and annual extra payments
//! - Amortization schedules, summaries and CSV export
//! - Interest comparison against the no-extra-payment baseline

pub mod amortization;
pub mod duration;
pub mod error;
pub mod loan;
pub mod scenario;
pub mod simulation;

// Re-export commonly used types
pub use duration::MonthSpan;
pub use error::{MortgageError, MortgageResult};
pub use loan::{LoanTerms, MortgageParams};
pub use scenario::{InterestComparison, MortgageReport, ScenarioRunner};
pub use simulation::{
    AmortizationSchedule, ExtraPaymentPolicy, LoanState, MortgageSimulator, PaymentEvent,
    ScheduleRow, SimulationConfig,
};
