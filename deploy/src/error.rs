use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("config error: {0}")]
    Config(String),

    #[error("deployer key: {0}")]
    Key(#[from] veridao_crypto::KeyError),

    #[error(transparent)]
    Dao(#[from] veridao_core::DaoError),
}
