//! Crate-wide error type.
//!
//! Infeasibility is not an error: an exhausted search is reported through
//! [`SearchStatus::Exhausted`](crate::search::SearchStatus). Only invalid
//! configuration and I/O failures surface here.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid domain [{min}, {max}]: bounds must satisfy 1 <= min <= max <= {limit}")]
    InvalidDomain { min: i64, max: i64, limit: i64 },
    #[error("unknown variant '{0}', expected one of A, B, C")]
    UnknownVariant(String),
    #[error("unknown variable '{0}', expected a letter from A to M")]
    UnknownVariable(String),
    #[error("IO error, more details: {0}")]
    Io(#[from] std::io::Error),
}
