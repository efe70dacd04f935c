//! Audit logging system for FinanceHub
//!
//! Every create, update and delete made through `Storage` is appended to
//! `audit.log` as one JSON line with the record's before/after values.
//!
//! - `AuditEntry`: one logged operation
//! - `AuditLogger`: appends entries and reads them back for `history`
//! - `generate_diff`: field-level summary attached to update entries

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
