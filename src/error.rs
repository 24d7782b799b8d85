//! Configuration errors.
//!
//! Evaluation itself never fails; everything that can go wrong is caught
//! while building a policy or loading the common-password list.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Complexity must be one of: very weak, weak, good, strong or very strong (got {0:?})")]
    InvalidComplexity(String),
    #[error("Brute-force keys per second must be greater than zero")]
    ZeroKeysPerSecond,
    #[error("Common password file not found: {0}")]
    CommonListNotFound(PathBuf),
    #[error("Failed to read common password file: {0}")]
    CommonListRead(#[from] std::io::Error),
    #[error("Common password file is empty")]
    CommonListEmpty,
}
