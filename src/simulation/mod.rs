//! Mortgage simulation: loan state, monthly payments and the amortization loop

mod engine;
mod payment;
mod schedule;
mod state;

pub use engine::{
    ExtraPaymentPolicy, MortgageSimulator, SimulationConfig, BALANCE_TOLERANCE, DEFAULT_SAFETY_MARGIN_MONTHS,
};
pub use payment::PaymentEvent;
pub use schedule::{AmortizationSchedule, ScheduleRow, ScheduleSummary};
pub use state::LoanState;
