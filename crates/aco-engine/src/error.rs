use aco_core::AcoError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("engine configuration error: {0}")]
    Config(#[from] AcoError),
}

pub type EngineResult<T> = Result<T, EngineError>;
