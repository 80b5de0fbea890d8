//! Role-based navigation.
//!
//! The console sidebar is a tree of modules, each gated by a list of
//! required permissions. Visibility is derived per session and never stored.

pub mod catalog;
pub mod module;

pub use catalog::catalog;
pub use module::{visible_modules, Module};
