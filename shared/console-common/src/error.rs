//! Common Error Types

use thiserror::Error;

/// Errors raised while parsing shared vocabulary types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The admin type is not one of `brand`, `agency` or `owner`.
    #[error("Unknown admin type: {0}")]
    UnknownAdminType(String),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
