//! Nullable infrastructure for deterministic testing.
//!
//! The registry core reaches the outside world through two seams: the
//! [`Clock`](veridao_types::Clock) and the
//! [`ValueLedger`](veridao_ledger::ValueLedger). This crate provides
//! test-friendly implementations of both that never touch the system clock
//! and can be told to fail on demand.

pub mod clock;
pub mod ledger;

pub use clock::NullClock;
pub use ledger::{LedgerCall, NullValueLedger};
