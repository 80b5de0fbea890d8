//! Admin Console Server
//!
//! Backend for the multi-tenant administrative console: role-based access
//! control, mock sign-in, and permission-filtered navigation.

pub mod api;
pub mod auth;
pub mod config;
pub mod navigation;
pub mod permissions;
