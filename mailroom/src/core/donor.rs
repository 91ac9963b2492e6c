//! Donor records and donation bookkeeping.

use crate::core::money::Amount;

/// Aggregate of all donations received from one donor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorRecord {
    /// Display form of the name, as first entered or seeded.
    pub name: String,
    pub total: Amount,
    pub donations: u32,
    /// `total / donations` rounded to the cent; zero when there are no donations.
    pub average: Amount,
}

impl DonorRecord {
    /// Zero-valued record for a donor with no donations yet.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            total: Amount::ZERO,
            donations: 0,
            average: Amount::ZERO,
        }
    }

    /// Record with existing history, deriving the average from the totals.
    pub fn with_history(name: &str, total: Amount, donations: u32) -> Self {
        Self {
            name: name.trim().to_string(),
            total,
            donations,
            average: total.div_round(donations).unwrap_or(Amount::ZERO),
        }
    }

    /// Add one donation and recompute the average.
    pub fn record_donation(&mut self, amount: Amount) {
        self.donations = self.donations.saturating_add(1);
        self.total = self.total + amount;
        self.average = self.total.div_round(self.donations).unwrap_or(Amount::ZERO);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_donation_sets_total_and_average() {
        let mut record = DonorRecord::new("  Ada Lovelace ");
        record.record_donation(Amount::from_cents(5000));
        assert_eq!(record.name, "Ada Lovelace");
        assert_eq!(record.donations, 1);
        assert_eq!(record.total, Amount::from_cents(5000));
        assert_eq!(record.average, Amount::from_cents(5000));
    }

    #[test]
    fn average_tracks_rounded_quotient_after_every_donation() {
        let mut record = DonorRecord::new("Grace Hopper");
        for cents in [1, 2, 1000, 333, -50, 99_999, 7] {
            record.record_donation(Amount::from_cents(cents));
            assert_eq!(
                Some(record.average),
                record.total.div_round(record.donations)
            );
        }
        assert_eq!(record.donations, 7);
        assert_eq!(record.total, Amount::from_cents(101_292));
    }

    #[test]
    fn history_without_donations_averages_zero() {
        let record = DonorRecord::with_history("Nobody", Amount::ZERO, 0);
        assert_eq!(record.average, Amount::ZERO);
    }
}
