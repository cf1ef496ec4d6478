/// Session cookie extractors
///
/// The session travels as a signed token in an HTTP-only cookie (see
/// `roomdesk_core::auth::session`). This module turns that cookie into an
/// explicit request-scoped identity that handlers receive as an argument,
/// instead of reading ambient global session state.
///
/// # Extractors
///
/// - [`SessionUser`]: rejects with a redirect to `/login` when the request is
///   not authenticated. Use for gated routes.
/// - [`OptionalSession`]: never rejects; yields `None` for anonymous
///   requests. Use for public pages that adapt to login state.
///
/// Admin checks stay inside each handler: every mutating room route verifies
/// `session.is_admin` itself and redirects to the listing view when the
/// check fails.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::cookie::CookieJar;
use roomdesk_core::auth::session::{validate_session_token, SessionClaims, SESSION_COOKIE};
use std::convert::Infallible;

use crate::app::AppState;

/// Authenticated user identity for the current request
#[derive(Debug, Clone)]
pub struct SessionUser {
    /// User ID from the session claims
    pub user_id: i64,

    /// Login name, re-displayed in views
    pub username: String,

    /// Whether the user may mutate room records
    pub is_admin: bool,
}

impl From<SessionClaims> for SessionUser {
    fn from(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
            is_admin: claims.admin,
        }
    }
}

/// Optional session extractor for public pages
///
/// Yields `None` when the cookie is absent, expired, or fails validation; an
/// unverifiable session is treated the same as being logged out.
#[derive(Debug, Clone)]
pub struct OptionalSession(pub Option<SessionUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = match CookieJar::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(never) => match never {},
        };

        let app_state = AppState::from_ref(state);

        let session = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| {
                validate_session_token(cookie.value(), app_state.session_secret()).ok()
            })
            .map(SessionUser::from);

        Ok(OptionalSession(session))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match OptionalSession::from_request_parts(parts, state).await {
            Ok(OptionalSession(Some(user))) => Ok(user),
            _ => Err(Redirect::to("/login")),
        }
    }
}
