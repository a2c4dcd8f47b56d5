//! Human-readable labels for elapsed loan time

use std::fmt;

/// A month count expressed as whole years plus remaining months
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSpan(pub u32);

impl MonthSpan {
    pub fn years(&self) -> u32 {
        self.0 / 12
    }

    pub fn months(&self) -> u32 {
        self.0 % 12
    }
}

impl fmt::Display for MonthSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.years(), self.months()) {
            (0, 0) => write!(f, "Unknown"),
            (years, 0) => write!(f, "{} Year(s)", years),
            (0, months) => write!(f, "{} Month(s)", months),
            (years, months) => write!(f, "{} Year(s) & {} Month(s)", years, months),
        }
    }
}

impl From<u32> for MonthSpan {
    fn from(months: u32) -> Self {
        MonthSpan(months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(MonthSpan(0).to_string(), "Unknown");
        assert_eq!(MonthSpan(1).to_string(), "1 Month(s)");
        assert_eq!(MonthSpan(11).to_string(), "11 Month(s)");
        assert_eq!(MonthSpan(12).to_string(), "1 Year(s)");
        assert_eq!(MonthSpan(13).to_string(), "1 Year(s) & 1 Month(s)");
        assert_eq!(MonthSpan(202).to_string(), "16 Year(s) & 10 Month(s)");
        assert_eq!(MonthSpan(360).to_string(), "30 Year(s)");
    }

    #[test]
    fn test_split() {
        let span = MonthSpan::from(27);
        assert_eq!(span.years(), 2);
        assert_eq!(span.months(), 3);
    }
}
