pub mod error;
pub mod model;
pub mod service;

pub use error::{LedgerError, Result};
pub use model::category::{default_categories, DEFAULT_CATEGORIES};
pub use model::ledger::HabitLedger;
pub use model::summary::{Summary, SummaryResult};
pub use service::analytics_service::{summary_text, AnalyticsService};
pub use service::dto::{Analytics, AnalyticsReport, ChartPoint, DistributionSlice, Notice, NoticeKind};
