use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("emergency shutdown is active")]
    ShutdownActive,

    #[error("account {0} is blacklisted")]
    Blacklisted(String),

    #[error("caller {0} is not the owner")]
    NotOwner(String),

    #[error("owner account must not be empty")]
    InvalidOwner,
}
