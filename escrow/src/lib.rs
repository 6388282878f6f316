//! Vouching escrows.
//!
//! A voucher stakes value for a beneficiary's identity. The value is pulled
//! into custody through the value ledger's allowance protocol and stays there
//! until the beneficiary either releases it (value is credited to them) or
//! disputes it (value stays frozen pending an outside decision).
//!
//! Escrows are keyed by voucher, so a voucher holds at most one unresolved
//! escrow at a time and a beneficiary must name the voucher to act on it.

pub mod engine;
pub mod error;
pub mod escrow;

pub use engine::EscrowEngine;
pub use error::EscrowError;
pub use escrow::{Escrow, EscrowStatus, ReleasePolicy};
