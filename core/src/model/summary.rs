use serde::{Deserialize, Serialize};

/// Aggregates over a ledger that has at least one recorded action.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SummaryResult {
    pub total: u64,
    /// `total / number_of_categories`, unrounded.
    pub average: f64,
    pub top_habit: String,
}

impl SummaryResult {
    /// Average rounded to two decimals, for display only.
    pub fn average_display(&self) -> String {
        format!("{:.2}", self.average)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Summary {
    /// Nothing recorded yet.
    Empty,
    Recorded(SummaryResult),
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        matches!(self, Summary::Empty)
    }

    pub fn result(&self) -> Option<&SummaryResult> {
        match self {
            Summary::Empty => None,
            Summary::Recorded(result) => Some(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_display_rounds_to_two_places() {
        let result = SummaryResult {
            total: 5,
            average: 5.0 / 6.0,
            top_habit: "Saved Water".to_string(),
        };
        assert_eq!(result.average_display(), "0.83");
        // underlying value keeps its precision
        assert!((result.average - 0.8333333333).abs() < 1e-9);
    }

    #[test]
    fn test_result_accessor() {
        assert!(Summary::Empty.result().is_none());
        assert!(Summary::Empty.is_empty());

        let recorded = Summary::Recorded(SummaryResult {
            total: 1,
            average: 0.5,
            top_habit: "A".to_string(),
        });
        assert_eq!(recorded.result().map(|r| r.total), Some(1));
    }
}
