//! Authentication Service
//!
//! Mock sign-in, context switching and the in-memory session store.

mod error;
mod handlers;
mod middleware;
pub mod store;

use axum::{middleware as axum_middleware, routing::post, Router};

use crate::api::AppState;

pub use error::{AuthError, AuthResult, ErrorResponse};
pub use handlers::{LoginRequest, LoginResponse, SessionView, SwitchContextRequest};
pub use middleware::{require_auth, require_permission};
pub use store::SessionStore;

/// Create authentication router.
///
/// Public routes (no auth required):
/// - POST /login - Sign in as a role within an admin type
///
/// Protected routes (auth required):
/// - POST /switch - Switch admin type and role
/// - POST /logout - End the session
pub fn router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new().route("/login", post(handlers::login));

    let protected_routes = Router::new()
        .route("/switch", post(handlers::switch_context))
        .route("/logout", post(handlers::logout))
        .layer(axum_middleware::from_fn_with_state(state, require_auth));

    public_routes.merge(protected_routes)
}
