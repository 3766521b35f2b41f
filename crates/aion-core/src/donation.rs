//! Donation goal progress.

use crate::format::format_amount;

/// 100% in basis points.
const FULL: u32 = 10_000;

/// Fundraising target and amount raised so far, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DonationGoal {
    pub target: u64,
    pub raised: u64,
}

impl DonationGoal {
    pub const fn new(target: u64, raised: u64) -> Self {
        Self { target, raised }
    }

    /// Progress in hundredths of a percent, capped at 100%.
    ///
    /// A zero target reports no progress.
    pub fn basis_points(&self) -> u32 {
        if self.target == 0 {
            return 0;
        }
        let bp = u128::from(self.raised) * u128::from(FULL) / u128::from(self.target);
        // Capped at FULL, so the cast cannot truncate
        bp.min(u128::from(FULL)) as u32
    }

    /// Progress as a fraction in `[0, 1]` for bar widths.
    pub fn fraction(&self) -> f64 {
        f64::from(self.basis_points()) / f64::from(FULL)
    }

    /// Progress with two fixed decimals, e.g. `"50.00%"`.
    pub fn percent_label(&self) -> String {
        let bp = self.basis_points();
        format!("{}.{:02}%", bp / 100, bp % 100)
    }

    pub fn remaining(&self) -> u64 {
        self.target.saturating_sub(self.raised)
    }

    pub fn is_met(&self) -> bool {
        self.raised >= self.target
    }

    /// `"850,000,000 / 1,700,000,000 IDR"`
    pub fn summary(&self, currency: &str) -> String {
        format!(
            "{} / {} {}",
            format_amount(self.raised),
            format_amount(self.target),
            currency
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_way_is_fifty_percent() {
        let goal = DonationGoal::new(1_700_000_000, 850_000_000);
        assert_eq!(goal.percent_label(), "50.00%");
        assert_eq!(goal.basis_points(), 5_000);
        assert_eq!(goal.fraction(), 0.5);
        assert_eq!(goal.remaining(), 850_000_000);
    }

    #[test]
    fn truncates_to_two_decimals() {
        let goal = DonationGoal::new(3, 1);
        assert_eq!(goal.percent_label(), "33.33%");
    }

    #[test]
    fn small_progress_keeps_leading_zero() {
        let goal = DonationGoal::new(10_000, 5);
        assert_eq!(goal.percent_label(), "0.05%");
    }

    #[test]
    fn overfunded_is_capped() {
        let goal = DonationGoal::new(100, 250);
        assert_eq!(goal.percent_label(), "100.00%");
        assert!(goal.is_met());
        assert_eq!(goal.remaining(), 0);
    }

    #[test]
    fn zero_target_reports_nothing() {
        let goal = DonationGoal::new(0, 10);
        assert_eq!(goal.percent_label(), "0.00%");
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        let goal = DonationGoal::new(16_000_000_000_000_000_000, 4_000_000_000_000_000_000);
        assert_eq!(goal.percent_label(), "25.00%");
    }

    #[test]
    fn summary_is_grouped() {
        let goal = DonationGoal::new(1_700_000_000, 850_000_000);
        assert_eq!(goal.summary("IDR"), "850,000,000 / 1,700,000,000 IDR");
    }
}
