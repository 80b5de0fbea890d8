//! Authentication Middleware

use std::future::Future;
use std::pin::Pin;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::api::{ApiError, AppState};
use crate::permissions::Session;

use super::error::AuthError;

/// Extract the session id from a `Bearer` authorization header.
pub(crate) fn bearer_session_id(headers: &HeaderMap) -> Result<Uuid, AuthError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingAuthHeader)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidAuthHeader)?;

    token.trim().parse().map_err(|_| AuthError::InvalidSession)
}

/// Middleware to require an authenticated session.
///
/// Resolves the Bearer token to a live `Session` and injects it into
/// request extensions.
///
/// # Usage
///
/// ```ignore
/// Router::new()
///     .route("/protected", get(handler))
///     .layer(axum::middleware::from_fn_with_state(state, require_auth))
/// ```
#[tracing::instrument(skip_all, fields(session_id = tracing::field::Empty))]
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let session_id = bearer_session_id(request.headers())?;

    let session = state
        .sessions
        .get(session_id)
        .ok_or(AuthError::InvalidSession)?;

    tracing::Span::current().record("session_id", tracing::field::display(session.id));
    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

/// Route guard requiring a single permission on the current session.
///
/// Must be layered inside `require_auth`.
///
/// # Example
///
/// ```ignore
/// let app = Router::new()
///     .route("/roles", get(list_roles))
///     .layer(from_fn(require_permission("owner:roles:view")));
/// ```
pub fn require_permission(
    required: &'static str,
) -> impl Fn(Request, Next) -> Pin<Box<dyn Future<Output = Response> + Send>>
       + Clone
       + Send
       + 'static {
    move |request: Request, next: Next| {
        Box::pin(async move {
            let Some(session) = request.extensions().get::<Session>() else {
                return AuthError::MissingAuthHeader.into_response();
            };

            if let Err(e) = session.require_permission(required) {
                return ApiError::from(e).into_response();
            }

            next.run(request).await
        })
    }
}

/// Extractor for the authenticated session in handlers.
///
/// ```ignore
/// async fn protected_handler(session: Session) -> impl IntoResponse {
///     format!("Hello, {}!", session.user.display_name)
/// }
/// ```
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Self>()
            .cloned()
            .ok_or(AuthError::MissingAuthHeader)
    }
}
