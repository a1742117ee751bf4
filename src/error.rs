use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("invalid value {value:?} for {key}")]
    InvalidSetting { key: String, value: String },

    #[error("inconsistent confidence thresholds: {0}")]
    InvalidThresholds(String),
}

pub type Result<T> = std::result::Result<T, Error>;
