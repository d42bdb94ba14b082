use tracing::{debug, info, warn};

use crate::error::Result;
use crate::model::ledger::HabitLedger;
use crate::model::summary::{Summary, SummaryResult};
use crate::service::dto::{Analytics, AnalyticsReport, ChartPoint, DistributionSlice, Notice};

pub struct AnalyticsService {
    ledger: HabitLedger,
}

impl AnalyticsService {
    pub fn new(ledger: HabitLedger) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &HabitLedger {
        &self.ledger
    }

    pub fn categories(&self) -> Vec<String> {
        self.ledger.labels().map(|l| l.to_string()).collect()
    }

    pub fn record(&mut self, habit: &str) -> Result<Notice> {
        if let Err(e) = self.ledger.increment(habit) {
            warn!("rejected increment: {}", e);
            return Err(e);
        }
        debug!(habit, count = self.ledger.count(habit), "recorded activity");
        Ok(Notice::info("Updated", format!("Added 1 point to '{}'", habit)))
    }

    pub fn reset(&mut self) -> Notice {
        self.ledger.reset();
        info!("ledger reset");
        Notice::info("Reset", "Data has been reset successfully!")
    }

    pub fn analytics(&self) -> Analytics {
        let result = match self.ledger.summary() {
            Summary::Empty => {
                debug!("analytics requested with no data");
                return Analytics::NoData(Notice::warning(
                    "No Data",
                    "Please record at least one activity!",
                ));
            }
            Summary::Recorded(result) => result,
        };

        info!(total = result.total, top = %result.top_habit, "computed analytics");

        let frequency = self
            .ledger
            .entries()
            .map(|(label, count)| ChartPoint {
                label: label.to_string(),
                count,
            })
            .collect();

        let total = result.total as f64;
        let distribution = self
            .ledger
            .nonzero_entries()
            .into_iter()
            .map(|(label, count)| DistributionSlice {
                label: label.to_string(),
                count,
                percent: count as f64 / total * 100.0,
            })
            .collect();

        Analytics::Report(AnalyticsReport {
            summary_text: summary_text(&result),
            summary: result,
            frequency,
            distribution,
        })
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new(HabitLedger::with_default_categories())
    }
}

pub fn summary_text(result: &SummaryResult) -> String {
    format!(
        "Total Eco Actions: {}\nAverage Actions per Habit: {}\nMost Frequent Habit: {}\n\nKeep up the great work for a greener planet!",
        result.total,
        result.average_display(),
        result.top_habit
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::service::dto::NoticeKind;

    fn report(service: &AnalyticsService) -> AnalyticsReport {
        match service.analytics() {
            Analytics::Report(report) => report,
            Analytics::NoData(n) => panic!("expected a report, got {:?}", n),
        }
    }

    #[test]
    fn test_record_notice() {
        let mut service = AnalyticsService::default();
        let notice = service.record("Saved Water").unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.title, "Updated");
        assert_eq!(notice.message, "Added 1 point to 'Saved Water'");
        assert_eq!(service.ledger().count("Saved Water"), Some(1));
    }

    #[test]
    fn test_record_unknown_propagates() {
        let mut service = AnalyticsService::default();
        let err = service.record("Drove Everywhere").unwrap_err();
        assert_eq!(err, LedgerError::unknown_category("Drove Everywhere"));
    }

    #[test]
    fn test_analytics_without_data() {
        let service = AnalyticsService::default();
        match service.analytics() {
            Analytics::NoData(notice) => {
                assert_eq!(notice.kind, NoticeKind::Warning);
                assert_eq!(notice.title, "No Data");
                assert_eq!(notice.message, "Please record at least one activity!");
            }
            Analytics::Report(_) => panic!("expected no data"),
        }
    }

    #[test]
    fn test_report_series() {
        let mut service = AnalyticsService::default();
        for _ in 0..3 {
            service.record("Recycled Waste").unwrap();
        }
        service.record("Saved Electricity").unwrap();
        service.record("Saved Water").unwrap();

        let report = report(&service);
        assert_eq!(report.frequency.len(), 6);
        assert_eq!(report.frequency[2].label, "Recycled Waste");
        assert_eq!(report.frequency[2].count, 3);
        assert_eq!(report.frequency[0].count, 0);

        let labels: Vec<&str> = report.distribution.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Saved Water", "Recycled Waste", "Saved Electricity"]);
        assert_eq!(report.distribution[1].percent_display(), "60.0%");

        let sum: f64 = report.distribution.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_text() {
        let mut service = AnalyticsService::default();
        for _ in 0..3 {
            service.record("Used Bicycle/Walked Instead of Vehicle").unwrap();
        }
        service.record("Saved Water").unwrap();
        service.record("Saved Water").unwrap();

        let report = report(&service);
        assert_eq!(
            report.summary_text,
            "Total Eco Actions: 5\n\
             Average Actions per Habit: 0.83\n\
             Most Frequent Habit: Used Bicycle/Walked Instead of Vehicle\n\
             \n\
             Keep up the great work for a greener planet!"
        );
    }

    #[test]
    fn test_reset_notice_clears_data() {
        let mut service = AnalyticsService::default();
        service.record("Avoided Plastic").unwrap();
        let notice = service.reset();
        assert_eq!(notice.title, "Reset");
        assert_eq!(notice.message, "Data has been reset successfully!");
        assert!(matches!(service.analytics(), Analytics::NoData(_)));
    }

    #[test]
    fn test_report_serializes() {
        let mut service = AnalyticsService::default();
        service.record("Planted a Tree/Plant").unwrap();
        let json = serde_json::to_value(service.analytics()).unwrap();
        assert_eq!(json["Report"]["summary"]["total"], 1);
    }
}
