use thiserror::Error;

/// Errors raised by the habit ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The label is not one of the ledger's configured categories.
    #[error("unknown category: {label}")]
    UnknownCategory { label: String },

    /// A ledger needs at least one category.
    #[error("a ledger needs at least one category")]
    NoCategories,

    /// The same label was configured twice.
    #[error("duplicate category: {label}")]
    DuplicateCategory { label: String },
}

pub type Result<T> = std::result::Result<T, LedgerError>;

impl LedgerError {
    pub fn unknown_category(label: impl Into<String>) -> Self {
        Self::UnknownCategory {
            label: label.into(),
        }
    }

    pub fn duplicate_category(label: impl Into<String>) -> Self {
        Self::DuplicateCategory {
            label: label.into(),
        }
    }
}
