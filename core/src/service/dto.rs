use serde::{Deserialize, Serialize};

use crate::model::summary::SummaryResult;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
}

/// A message for the presentation layer to show (dialog, popup, stderr...).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// One bar of the frequency chart.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: String,
    pub count: u64,
}

/// One slice of the distribution chart.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DistributionSlice {
    pub label: String,
    pub count: u64,
    /// Share of the total, 0-100.
    pub percent: f64,
}

impl DistributionSlice {
    pub fn percent_display(&self) -> String {
        format!("{:.1}%", self.percent)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalyticsReport {
    pub summary: SummaryResult,
    pub summary_text: String,
    /// Every category, zeros included.
    pub frequency: Vec<ChartPoint>,
    /// Only categories with a count above zero.
    pub distribution: Vec<DistributionSlice>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Analytics {
    NoData(Notice),
    Report(AnalyticsReport),
}
