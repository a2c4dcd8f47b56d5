//! Month-by-month amortization engine

use log::{debug, info, warn};

use super::payment::PaymentEvent;
use super::schedule::{AmortizationSchedule, ScheduleRow};
use super::state::LoanState;
use crate::amortization::interest_for_period;
use crate::error::{MortgageError, MortgageResult};
use crate::loan::LoanTerms;

/// Extra months allowed past the contractual term before the loop gives up
pub const DEFAULT_SAFETY_MARGIN_MONTHS: u32 = 12;

/// Residual balance, as a fraction of the original principal, treated as repaid
pub const BALANCE_TOLERANCE: f64 = 1e-9;

/// Extra principal the borrower pays on top of the required payment
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExtraPaymentPolicy {
    /// Paid every month
    monthly: f64,
    /// Paid additionally in months divisible by 12
    annual: f64,
}

impl ExtraPaymentPolicy {
    pub fn new(monthly: f64, annual: f64) -> MortgageResult<Self> {
        if !monthly.is_finite() || monthly < 0.0 {
            return Err(MortgageError::InvalidAmount { field: "monthly_extra_payment", value: monthly });
        }
        if !annual.is_finite() || annual < 0.0 {
            return Err(MortgageError::InvalidAmount { field: "annual_extra_payment", value: annual });
        }
        Ok(Self { monthly, annual })
    }

    /// No extra payments at all
    pub fn none() -> Self {
        Self::default()
    }

    pub fn monthly(&self) -> f64 {
        self.monthly
    }

    pub fn annual(&self) -> f64 {
        self.annual
    }

    pub fn is_none(&self) -> bool {
        self.monthly == 0.0 && self.annual == 0.0
    }

    /// Extra amount due in a given payment month (1-indexed)
    pub fn extra_for_month(&self, month: u32) -> f64 {
        if month % 12 == 0 {
            self.monthly + self.annual
        } else {
            self.monthly
        }
    }
}

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Extra principal payments
    pub extra_payments: ExtraPaymentPolicy,

    /// Months allowed beyond the term before reporting a non-terminating run
    pub safety_margin_months: u32,

    /// Whether to keep a row per month (totals are always tracked)
    pub record_schedule: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            extra_payments: ExtraPaymentPolicy::none(),
            safety_margin_months: DEFAULT_SAFETY_MARGIN_MONTHS,
            record_schedule: true,
        }
    }
}

/// Owns the loan state and advances it one payment at a time
#[derive(Debug, Clone)]
pub struct MortgageSimulator {
    terms: LoanTerms,
    config: SimulationConfig,
    state: LoanState,
}

impl MortgageSimulator {
    /// Start a simulation at origination
    pub fn new(terms: LoanTerms, config: SimulationConfig) -> Self {
        let state = LoanState::from_terms(&terms);
        Self { terms, config, state }
    }

    /// Resume a simulation from an existing state
    pub fn from_state(terms: LoanTerms, config: SimulationConfig, state: LoanState) -> Self {
        Self { terms, config, state }
    }

    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> &LoanState {
        &self.state
    }

    /// Last month the loop may reach before it is considered runaway
    pub fn max_months(&self) -> u32 {
        self.terms.term_months().saturating_add(self.config.safety_margin_months)
    }

    /// Payment due this month given an extra principal amount. Does not touch state.
    pub fn compute_next_payment(&self, extra_payment: f64) -> PaymentEvent {
        let balance = self.state.balance;
        let required = self.terms.required_payment();
        let tolerance = self.terms.principal() * BALANCE_TOLERANCE;

        // Closing payment: remaining balance in full, no further interest.
        // Rounding residue from earlier months must not push this into an extra month.
        if required + tolerance >= balance {
            return PaymentEvent::new(balance, 0.0);
        }

        let interest_due = interest_for_period(balance, self.terms.monthly_rate());
        let desired_total = required + extra_payment.max(0.0);
        let mut principal = (desired_total - interest_due).min(balance).max(0.0);
        if balance - principal <= tolerance {
            principal = balance;
        }

        PaymentEvent::new(principal, interest_due)
    }

    /// Apply a payment to the loan state
    pub fn apply_payment(&mut self, payment: &PaymentEvent) -> MortgageResult<()> {
        if payment.principal_portion < 0.0 {
            return Err(MortgageError::InvalidAmount {
                field: "principal_portion",
                value: payment.principal_portion,
            });
        }
        if payment.interest_portion < 0.0 {
            return Err(MortgageError::InvalidAmount {
                field: "interest_portion",
                value: payment.interest_portion,
            });
        }
        if payment.principal_portion > self.state.balance {
            return Err(MortgageError::Overpayment {
                principal: payment.principal_portion,
                balance: self.state.balance,
            });
        }

        self.state.apply(payment);
        Ok(())
    }

    /// Simulate the next month under the configured extra-payment policy
    pub fn step(&mut self) -> MortgageResult<ScheduleRow> {
        let month = self.state.month + 1;
        let extra = self.config.extra_payments.extra_for_month(month);

        let payment = self.compute_next_payment(extra);
        self.apply_payment(&payment)?;

        debug!(
            "Month {}: principal={:.2} interest={:.2} balance={:.2}",
            month, payment.principal_portion, payment.interest_portion, self.state.balance
        );

        Ok(ScheduleRow::new(
            month,
            &payment,
            self.state.balance,
            self.state.cumulative_interest_paid,
        ))
    }

    /// Run until the balance reaches zero
    pub fn run(&mut self) -> MortgageResult<AmortizationSchedule> {
        let mut schedule = AmortizationSchedule::new(self.terms.principal());
        schedule.final_balance = self.state.balance;
        let max_months = self.max_months();

        while self.state.balance > 0.0 {
            if self.state.month >= max_months {
                warn!(
                    "Stopping after {} months with balance {} still outstanding",
                    self.state.month, self.state.balance
                );
                return Err(MortgageError::NonTerminatingSimulation {
                    months: self.state.month,
                    remaining_balance: self.state.balance,
                });
            }

            let row = self.step()?;
            schedule.record(row, self.config.record_schedule);
        }

        info!(
            "Loan paid off after {} months, total interest {:.2}",
            self.state.month, self.state.cumulative_interest_paid
        );

        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn reference_terms() -> LoanTerms {
        LoanTerms::new(400_000.0, 0.0375, 30).unwrap()
    }

    fn config_with_extras(monthly: f64, annual: f64) -> SimulationConfig {
        SimulationConfig {
            extra_payments: ExtraPaymentPolicy::new(monthly, annual).unwrap(),
            ..Default::default()
        }
    }

    #[test]
    fn test_baseline_pays_off_in_term() {
        let mut sim = MortgageSimulator::new(reference_terms(), SimulationConfig::default());
        let schedule = sim.run().unwrap();

        assert_eq!(schedule.months_to_payoff, 360);
        assert_eq!(schedule.rows.len(), 360);
        assert_eq!(sim.state().balance, 0.0);
        assert_eq!(schedule.final_balance, 0.0);
    }

    #[test]
    fn test_principal_conserved() {
        let mut sim = MortgageSimulator::new(reference_terms(), config_with_extras(750.0, 1000.0));
        let schedule = sim.run().unwrap();

        let principal_sum: f64 = schedule.rows.iter().map(|r| r.principal).sum();
        assert_abs_diff_eq!(principal_sum, 400_000.0, epsilon = 1e-3);
        assert_abs_diff_eq!(schedule.total_principal_paid, 400_000.0, epsilon = 1e-3);

        for row in &schedule.rows {
            assert_eq!(row.principal + row.interest, row.total_payment);
        }
    }

    #[test]
    fn test_balance_and_interest_monotonic() {
        let mut sim = MortgageSimulator::new(reference_terms(), config_with_extras(300.0, 5000.0));
        let mut prev_balance = sim.state().balance;
        let mut prev_interest = sim.state().cumulative_interest_paid;

        while !sim.state().is_paid_off() {
            let row = sim.step().unwrap();
            assert!(row.balance <= prev_balance);
            assert!(row.balance >= 0.0);
            assert!(row.cumulative_interest >= prev_interest);
            prev_balance = row.balance;
            prev_interest = row.cumulative_interest;
        }
    }

    #[test]
    fn test_extra_payments_shorten_loan() {
        let baseline = MortgageSimulator::new(reference_terms(), SimulationConfig::default())
            .run()
            .unwrap();
        let accelerated = MortgageSimulator::new(reference_terms(), config_with_extras(750.0, 1000.0))
            .run()
            .unwrap();

        assert!(accelerated.months_to_payoff < 360);
        assert!(accelerated.months_to_payoff <= baseline.months_to_payoff);
        assert!(accelerated.total_interest_paid < baseline.total_interest_paid);
        assert!(accelerated.total_interest_paid < reference_terms().theoretical_total_interest());
    }

    #[test]
    fn test_final_payment_waives_interest() {
        let terms = reference_terms();
        let state = LoanState::with_balance(1000.0);
        let mut sim = MortgageSimulator::from_state(terms, SimulationConfig::default(), state);

        assert!(terms.required_payment() > 1000.0);
        let payment = sim.compute_next_payment(250.0);
        assert_eq!(payment.principal_portion, 1000.0);
        assert_eq!(payment.interest_portion, 0.0);

        sim.apply_payment(&payment).unwrap();
        assert_eq!(sim.state().balance, 0.0);
    }

    #[test]
    fn test_extra_capped_at_balance() {
        let terms = reference_terms();
        let state = LoanState::with_balance(5000.0);
        let sim = MortgageSimulator::from_state(terms, SimulationConfig::default(), state);

        let payment = sim.compute_next_payment(100_000.0);
        assert_eq!(payment.principal_portion, 5000.0);
        assert_abs_diff_eq!(payment.interest_portion, 5000.0 * 0.003125, epsilon = 1e-9);
    }

    #[test]
    fn test_compute_has_no_side_effects() {
        let sim = MortgageSimulator::new(reference_terms(), SimulationConfig::default());
        let first = sim.compute_next_payment(0.0);
        let second = sim.compute_next_payment(0.0);

        assert_eq!(first, second);
        assert_eq!(sim.state().balance, 400_000.0);
        assert_abs_diff_eq!(first.interest_portion, 1250.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.total(), 1852.46, epsilon = 0.01);
    }

    #[test]
    fn test_overpayment_rejected() {
        let mut sim = MortgageSimulator::new(reference_terms(), SimulationConfig::default());
        let result = sim.apply_payment(&PaymentEvent::new(400_001.0, 0.0));

        assert!(matches!(result, Err(MortgageError::Overpayment { .. })));
        assert_eq!(sim.state().balance, 400_000.0);
        assert_eq!(sim.state().month, 0);
    }

    #[test]
    fn test_zero_rate_flat_amortization() {
        let terms = LoanTerms::new(120_000.0, 0.0, 10).unwrap();
        let schedule = MortgageSimulator::new(terms, SimulationConfig::default()).run().unwrap();

        assert_eq!(schedule.months_to_payoff, 120);
        assert_eq!(schedule.total_interest_paid, 0.0);
    }

    #[test]
    fn test_zero_rate_inexact_installment_ends_on_term() {
        // P / n has no exact binary representation in these cases
        for &(principal, years) in &[(100.0, 1u32), (250_000.0, 15), (100_000.0, 30), (1_000.0, 7)] {
            let terms = LoanTerms::new(principal, 0.0, years).unwrap();
            let mut sim = MortgageSimulator::new(terms, SimulationConfig::default());
            let schedule = sim.run().unwrap();

            assert_eq!(schedule.months_to_payoff, terms.term_months(), "{} over {} years", principal, years);
            assert_eq!(schedule.final_balance, 0.0);
            assert_eq!(sim.state().balance, 0.0);
            assert_abs_diff_eq!(schedule.total_principal_paid, principal, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_tiny_rate_ends_on_term() {
        let terms = LoanTerms::new(100_000.0, 1e-9, 30).unwrap();
        let schedule = MortgageSimulator::new(terms, SimulationConfig::default()).run().unwrap();

        assert_eq!(schedule.months_to_payoff, 360);
        assert_eq!(schedule.final_balance, 0.0);
        assert!(schedule.total_interest_paid < 0.01);
    }

    #[test]
    fn test_negligible_residual_closes_loan() {
        let terms = reference_terms();
        let state = LoanState::with_balance(terms.required_payment() + 1e-7);
        let mut sim = MortgageSimulator::from_state(terms, SimulationConfig::default(), state);

        let payment = sim.compute_next_payment(0.0);
        assert_eq!(payment.principal_portion, sim.state().balance);
        assert_eq!(payment.interest_portion, 0.0);

        sim.apply_payment(&payment).unwrap();
        assert!(sim.state().is_paid_off());
    }

    #[test]
    fn test_iteration_bound_reports_non_termination() {
        // Resumed with a balance far larger than the terms can amortize
        let terms = LoanTerms::new(10_000.0, 0.05, 1).unwrap();
        let config = SimulationConfig { safety_margin_months: 2, ..Default::default() };
        let state = LoanState::with_balance(1_000_000.0);
        let mut sim = MortgageSimulator::from_state(terms, config, state);

        let result = sim.run();
        match result {
            Err(MortgageError::NonTerminatingSimulation { months, remaining_balance }) => {
                assert_eq!(months, 14);
                assert!(remaining_balance > 0.0);
            }
            other => panic!("expected non-termination, got {:?}", other),
        }
    }

    #[test]
    fn test_schedule_recording_disabled() {
        let config = SimulationConfig { record_schedule: false, ..Default::default() };
        let schedule = MortgageSimulator::new(reference_terms(), config).run().unwrap();

        assert!(schedule.rows.is_empty());
        assert_eq!(schedule.months_to_payoff, 360);
        assert!(schedule.total_interest_paid > 0.0);
    }

    #[test]
    fn test_annual_extra_only_in_twelfth_month() {
        let policy = ExtraPaymentPolicy::new(100.0, 1000.0).unwrap();

        assert_eq!(policy.extra_for_month(1), 100.0);
        assert_eq!(policy.extra_for_month(11), 100.0);
        assert_eq!(policy.extra_for_month(12), 1100.0);
        assert_eq!(policy.extra_for_month(24), 1100.0);
        assert!(ExtraPaymentPolicy::none().is_none());
        assert!(ExtraPaymentPolicy::new(-1.0, 0.0).is_err());
    }
}
