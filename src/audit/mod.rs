//! Audit logging
//!
//! Records every recorded expense and every export in an append-only
//! line-delimited JSON file, when an audit log path is configured.
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::exported(&path, rows.len()))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
