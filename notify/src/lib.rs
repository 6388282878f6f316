//! Notification and audit log.
//!
//! Every successful state change is recorded as a typed [`DaoEvent`]. The
//! log is append-only: records are never edited or removed, and each carries
//! a sequence number one greater than the previous record's.

pub mod event;
pub mod log;

pub use event::{DaoEvent, EventRecord, NotificationRecord};
pub use log::EventLog;
