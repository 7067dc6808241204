use thiserror::Error;
use std::io;

#[derive(Error, Debug)]
pub enum MarketMoodError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Registry error: {0}")]
    Registry(String),

    #[error("News retrieval error: {0}")]
    Retrieval(String),

    #[error("Scoring error: {0}")]
    Scoring(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl MarketMoodError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn registry_error(msg: impl Into<String>) -> Self {
        Self::Registry(msg.into())
    }

    pub fn retrieval_error(msg: impl Into<String>) -> Self {
        Self::Retrieval(msg.into())
    }

    pub fn scoring_error(msg: impl Into<String>) -> Self {
        Self::Scoring(msg.into())
    }

    pub fn export_error(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, MarketMoodError>;
