//! Scenario runner comparing an extra-payment plan against the contractual baseline
//!
//! Holds a base simulation configuration, then runs the same loan under
//! different extra-payment policies and reports interest savings.

use log::info;
use serde::Serialize;

use crate::duration::MonthSpan;
use crate::error::MortgageResult;
use crate::loan::{LoanTerms, MortgageParams};
use crate::simulation::{AmortizationSchedule, ExtraPaymentPolicy, MortgageSimulator, SimulationConfig};

/// Actual interest of a run measured against the theoretical no-extra-payment total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterestComparison {
    /// Interest actually paid in the simulated run
    pub actual_interest: f64,

    /// Required payment times term, less principal
    pub theoretical_interest: f64,

    /// Theoretical minus actual, present only when positive
    pub interest_saved: Option<f64>,

    pub months_to_payoff: u32,
    pub contractual_months: u32,

    /// Months cut from the contractual term
    pub months_saved: u32,
}

impl InterestComparison {
    pub fn new(terms: &LoanTerms, schedule: &AmortizationSchedule) -> Self {
        let theoretical_interest = terms.theoretical_total_interest();
        let actual_interest = schedule.total_interest_paid;
        let saved = theoretical_interest - actual_interest;

        Self {
            actual_interest,
            theoretical_interest,
            interest_saved: (saved > 0.0).then_some(saved),
            months_to_payoff: schedule.months_to_payoff,
            contractual_months: terms.term_months(),
            months_saved: terms.term_months().saturating_sub(schedule.months_to_payoff),
        }
    }

    /// Payoff time as a readable label
    pub fn payoff_label(&self) -> String {
        MonthSpan(self.months_to_payoff).to_string()
    }
}

/// Everything produced for one parameter set
#[derive(Debug, Clone, Serialize)]
pub struct MortgageReport {
    pub params: MortgageParams,
    pub terms: LoanTerms,
    pub schedule: AmortizationSchedule,
    pub comparison: InterestComparison,
}

/// Runs simulations for one loan under a shared base configuration
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    base_config: SimulationConfig,
}

impl ScenarioRunner {
    /// Create runner with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with a custom base configuration
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { base_config: config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.base_config
    }

    /// Run the loan under the given extra-payment policy
    pub fn run(&self, terms: &LoanTerms, extra_payments: ExtraPaymentPolicy) -> MortgageResult<AmortizationSchedule> {
        let config = SimulationConfig {
            extra_payments,
            ..self.base_config.clone()
        };
        MortgageSimulator::new(*terms, config).run()
    }

    /// Run with the required payment only
    pub fn run_baseline(&self, terms: &LoanTerms) -> MortgageResult<AmortizationSchedule> {
        self.run(terms, ExtraPaymentPolicy::none())
    }

    /// Run several extra-payment plans for the same loan
    pub fn run_scenarios(
        &self,
        terms: &LoanTerms,
        policies: &[ExtraPaymentPolicy],
    ) -> MortgageResult<Vec<InterestComparison>> {
        policies
            .iter()
            .map(|policy| {
                let schedule = self.run(terms, *policy)?;
                Ok(InterestComparison::new(terms, &schedule))
            })
            .collect()
    }

    /// Validate parameters, simulate, and compare against the theoretical baseline
    pub fn run_params(&self, params: &MortgageParams) -> MortgageResult<MortgageReport> {
        let terms = params.loan_terms()?;
        let extra_payments = params.extra_payment_policy()?;

        let schedule = self.run(&terms, extra_payments)?;
        let comparison = InterestComparison::new(&terms, &schedule);

        info!(
            "Principal {:.2} paid off in {} months; interest {:.2} vs theoretical {:.2}",
            terms.principal(),
            comparison.months_to_payoff,
            comparison.actual_interest,
            comparison.theoretical_interest
        );

        Ok(MortgageReport {
            params: params.clone(),
            terms,
            schedule,
            comparison,
        })
    }
}
