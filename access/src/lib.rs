//! Access control for the identity registry.
//!
//! One owner holds the administrative capability. Two independent membership
//! sets are kept: the blacklist is enforced by every guarded operation, the
//! whitelist is informational. A process-wide emergency-shutdown flag rejects
//! all guarded mutations while set.

pub mod control;
pub mod error;

pub use control::AccessControl;
pub use error::AccessError;
