//! Audit logging for the finance tracker
//!
//! Records every transaction and budget creation or deletion, every
//! preference change and every first-run seed in an append-only log of
//! JSON lines.
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(
//!     EntityType::Transaction,
//!     txn.id.as_str(),
//!     Some(txn.title.clone()),
//!     &txn,
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
