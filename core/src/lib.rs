//! veridao core.
//!
//! [`IdentityVerificationDao`] is the single context object that owns all
//! registry state: access control, identity attestations, reputation
//! scores, escrows and the event log. It is bound to a value ledger through
//! the [`ValueLedger`](veridao_ledger::ValueLedger) trait and takes every
//! acting account as an explicit `caller` argument.

pub mod auth;
pub mod config;
pub mod dao;
pub mod error;
pub mod snapshot;

pub use auth::{AuthError, Caller, Session};
pub use config::DaoConfig;
pub use dao::IdentityVerificationDao;
pub use error::{DaoError, ErrorKind};
pub use snapshot::DaoSnapshot;

pub use veridao_escrow::{Escrow, EscrowStatus, ReleasePolicy};
pub use veridao_identity::{
    AuthenticationData, BiometricData, ConsentAuthorization, GovernmentIdentification,
    IdentityProfile,
};
pub use veridao_notify::{DaoEvent, EventRecord, NotificationRecord};
pub use veridao_reputation::{calculate_reward, REWARD_PER_POINT};
