pub mod category;
pub mod ledger;
pub mod summary;
