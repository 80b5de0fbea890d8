//! Admin Console Common Library
//!
//! Shared types used by the server and any API client of the console.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
