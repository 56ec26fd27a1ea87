use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiBlogError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Data file not found: {0}. Pass --data PATH or run `aiblog config --set-data PATH`")]
    DataFileNotFound(String),

    #[error("Dataset has {0} issue(s)")]
    InvalidDataset(usize),

    #[error("Invalid value: {0}")]
    InvalidArgument(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] aiblog_common::Error),
}

pub type Result<T> = std::result::Result<T, AiBlogError>;
