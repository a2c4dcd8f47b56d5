//! Amortization schedule output structures

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::PaymentEvent;
use crate::duration::MonthSpan;
use crate::error::{MortgageError, MortgageResult};

/// A single row of the amortization schedule for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Payment number (1-indexed)
    pub month: u32,

    /// Elapsed time label, e.g. "2 Year(s) & 3 Month(s)"
    pub elapsed: String,

    pub principal: f64,
    pub interest: f64,
    pub total_payment: f64,

    /// Balance after this payment
    pub balance: f64,

    /// Interest paid through this month
    pub cumulative_interest: f64,
}

impl ScheduleRow {
    pub fn new(month: u32, payment: &PaymentEvent, balance: f64, cumulative_interest: f64) -> Self {
        Self {
            month,
            elapsed: MonthSpan(month).to_string(),
            principal: payment.principal_portion,
            interest: payment.interest_portion,
            total_payment: payment.total(),
            balance,
            cumulative_interest,
        }
    }
}

/// Complete result of one amortization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Amount originally borrowed
    pub principal: f64,

    /// Monthly rows (empty when row recording is disabled)
    pub rows: Vec<ScheduleRow>,

    /// Number of payments until the balance reached zero
    pub months_to_payoff: u32,

    pub total_interest_paid: f64,
    pub total_principal_paid: f64,
    pub final_balance: f64,
}

impl AmortizationSchedule {
    pub fn new(principal: f64) -> Self {
        Self {
            principal,
            rows: Vec::new(),
            months_to_payoff: 0,
            total_interest_paid: 0.0,
            total_principal_paid: 0.0,
            final_balance: principal,
        }
    }

    /// Record one simulated month
    pub fn record(&mut self, row: ScheduleRow, keep_row: bool) {
        self.months_to_payoff = row.month;
        self.total_interest_paid += row.interest;
        self.total_principal_paid += row.principal;
        self.final_balance = row.balance;

        if keep_row {
            self.rows.push(row);
        }
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        let total_paid = self.total_interest_paid + self.total_principal_paid;
        let largest_payment = self
            .rows
            .iter()
            .map(|r| r.total_payment)
            .fold(0.0_f64, f64::max);

        ScheduleSummary {
            months_to_payoff: self.months_to_payoff,
            payoff_label: MonthSpan(self.months_to_payoff).to_string(),
            total_paid,
            total_interest_paid: self.total_interest_paid,
            total_principal_paid: self.total_principal_paid,
            largest_payment,
            final_balance: self.final_balance,
        }
    }

    /// Write recorded rows as CSV with a header line
    pub fn write_csv<W: Write>(&self, writer: W) -> MortgageResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            csv_writer.serialize(row)?;
        }
        csv_writer
            .flush()
            .map_err(|e| MortgageError::Export(e.to_string()))?;
        Ok(())
    }
}

/// Summary statistics for an amortization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub months_to_payoff: u32,
    pub payoff_label: String,
    pub total_paid: f64,
    pub total_interest_paid: f64,
    pub total_principal_paid: f64,
    /// Largest single payment among recorded rows
    pub largest_payment: f64,
    pub final_balance: f64,
}
