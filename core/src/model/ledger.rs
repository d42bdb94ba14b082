use crate::error::{LedgerError, Result};
use crate::model::category::default_categories;
use crate::model::summary::{Summary, SummaryResult};

/// One count per category, kept in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitLedger {
    counts: Vec<(String, u64)>,
}

impl HabitLedger {
    /// Creates a ledger with every count at zero.
    ///
    /// Labels keep the order they are given in. The list must be non-empty
    /// and free of duplicates.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts: Vec<(String, u64)> = Vec::new();
        for label in labels {
            let label = label.into();
            if counts.iter().any(|(existing, _)| *existing == label) {
                return Err(LedgerError::duplicate_category(label));
            }
            counts.push((label, 0));
        }

        if counts.is_empty() {
            return Err(LedgerError::NoCategories);
        }

        Ok(Self { counts })
    }

    pub fn with_default_categories() -> Self {
        Self {
            counts: default_categories().into_iter().map(|c| (c, 0)).collect(),
        }
    }

    pub fn increment(&mut self, habit: &str) -> Result<()> {
        match self.counts.iter_mut().find(|(label, _)| label == habit) {
            Some((_, count)) => {
                *count += 1;
                Ok(())
            }
            None => Err(LedgerError::unknown_category(habit)),
        }
    }

    pub fn reset(&mut self) {
        for (_, count) in self.counts.iter_mut() {
            *count = 0;
        }
    }

    pub fn summary(&self) -> Summary {
        let total: u64 = self.counts.iter().map(|(_, c)| c).sum();
        if total == 0 {
            return Summary::Empty;
        }

        // Strict comparison keeps the earliest label on ties.
        let mut top = &self.counts[0];
        for entry in &self.counts[1..] {
            if entry.1 > top.1 {
                top = entry;
            }
        }

        Summary::Recorded(SummaryResult {
            total,
            average: total as f64 / self.counts.len() as f64,
            top_habit: top.0.clone(),
        })
    }

    /// Categories with a count above zero, in declaration order.
    pub fn nonzero_entries(&self) -> Vec<(&str, u64)> {
        self.entries().filter(|(_, count)| *count > 0).collect()
    }

    /// Every category with its count, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.counts.iter().map(|(label, _)| label.as_str())
    }

    pub fn count(&self, habit: &str) -> Option<u64> {
        self.counts
            .iter()
            .find(|(label, _)| label == habit)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always false for a constructed ledger: empty label lists are
    /// rejected by `new`.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl Default for HabitLedger {
    fn default() -> Self {
        Self::with_default_categories()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::category::DEFAULT_CATEGORIES;

    const BIKE: &str = "Used Bicycle/Walked Instead of Vehicle";
    const WATER: &str = "Saved Water";
    const RECYCLE: &str = "Recycled Waste";
    const PLASTIC: &str = "Avoided Plastic";

    fn ledger() -> HabitLedger {
        HabitLedger::with_default_categories()
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = ledger();
        assert_eq!(ledger.summary(), Summary::Empty);
        assert!(ledger.entries().all(|(_, c)| c == 0));
        assert_eq!(ledger.len(), 6);
        assert!(!ledger.is_empty());
    }

    #[test]
    fn test_single_category_ledger_is_not_empty() {
        let ledger = HabitLedger::new(["Only"]).unwrap();
        assert_eq!(ledger.len(), 1);
        assert!(!ledger.is_empty());
    }

    #[test]
    fn test_labels_keep_declaration_order() {
        let ledger = ledger();
        let labels: Vec<&str> = ledger.labels().collect();
        assert_eq!(labels, DEFAULT_CATEGORIES.to_vec());
    }

    #[test]
    fn test_new_rejects_empty_list() {
        let err = HabitLedger::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, LedgerError::NoCategories);
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let err = HabitLedger::new(["A", "B", "A"]).unwrap_err();
        assert_eq!(err, LedgerError::duplicate_category("A"));
    }

    #[test]
    fn test_increment_counts() {
        let mut ledger = ledger();
        ledger.increment(WATER).unwrap();
        ledger.increment(WATER).unwrap();
        ledger.increment(BIKE).unwrap();

        assert_eq!(ledger.count(WATER), Some(2));
        assert_eq!(ledger.count(BIKE), Some(1));
        assert_eq!(ledger.count(RECYCLE), Some(0));
    }

    #[test]
    fn test_unknown_category_does_not_mutate() {
        let mut ledger = ledger();
        ledger.increment(WATER).unwrap();
        let before = ledger.clone();

        let err = ledger.increment("NotARealHabit").unwrap_err();
        assert_eq!(err, LedgerError::unknown_category("NotARealHabit"));
        assert_eq!(ledger, before);
        assert_eq!(ledger.count("NotARealHabit"), None);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut ledger = ledger();
        ledger.increment(PLASTIC).unwrap();
        ledger.reset();
        ledger.reset();

        assert!(ledger.entries().all(|(_, c)| c == 0));
        assert_eq!(ledger.summary(), Summary::Empty);
    }

    #[test]
    fn test_summary_totals() {
        let mut ledger = ledger();
        for _ in 0..3 {
            ledger.increment(BIKE).unwrap();
        }
        for _ in 0..2 {
            ledger.increment(WATER).unwrap();
        }

        let summary = ledger.summary();
        let result = summary.result().unwrap();
        assert_eq!(result.total, 5);
        assert_eq!(result.average, 5.0 / 6.0);
        assert_eq!(result.average_display(), "0.83");
        assert_eq!(result.top_habit, BIKE);
    }

    #[test]
    fn test_average_uses_all_categories() {
        let mut ledger = HabitLedger::new(["A", "B", "C", "D"]).unwrap();
        ledger.increment("B").unwrap();
        ledger.increment("B").unwrap();

        assert_eq!(ledger.summary().result().unwrap().average, 0.5);
    }

    #[test]
    fn test_tie_break_prefers_declaration_order() {
        let mut ledger = ledger();
        // later category reaches the max first
        for _ in 0..4 {
            ledger.increment(PLASTIC).unwrap();
        }
        for _ in 0..4 {
            ledger.increment(WATER).unwrap();
        }

        assert_eq!(ledger.summary().result().unwrap().top_habit, WATER);
    }

    #[test]
    fn test_nonzero_entries_filtering() {
        let mut ledger = ledger();
        ledger.increment(BIKE).unwrap();
        ledger.increment(RECYCLE).unwrap();
        ledger.increment(RECYCLE).unwrap();

        assert_eq!(ledger.nonzero_entries(), vec![(BIKE, 1), (RECYCLE, 2)]);
    }

    #[test]
    fn test_nonzero_entries_empty_when_nothing_recorded() {
        assert!(ledger().nonzero_entries().is_empty());
    }

    #[test]
    fn test_replay_after_reset_reproduces_summary() {
        let sequence = [WATER, BIKE, WATER, PLASTIC, RECYCLE, WATER];
        let mut ledger = ledger();
        for habit in sequence {
            ledger.increment(habit).unwrap();
        }
        let first = ledger.summary();

        ledger.reset();
        for habit in sequence {
            ledger.increment(habit).unwrap();
        }

        assert_eq!(ledger.summary(), first);
    }
}
