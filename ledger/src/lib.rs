//! The fungible-value ledger that escrows are funded from.
//!
//! The registry core never keeps balances of its own. It talks to a ledger
//! through [`ValueLedger`], which exposes exactly two ways to move value:
//! an allowance pull (the owner approved the spender beforehand) and a
//! direct transfer out of an account the caller controls.
//!
//! [`TokenLedger`] is an in-memory ERC-20 style implementation used by the
//! deploy tool and by tests.

pub mod error;
pub mod token;
pub mod value;

pub use error::LedgerError;
pub use token::TokenLedger;
pub use value::ValueLedger;
