//! Shared Types

mod admin;
mod user;

pub use admin::AdminType;
pub use user::{SessionUser, UserProfile};
