/// User registration, login, and logout handlers
///
/// Registration is public. Login establishes the session cookie; the admin
/// flag is derived from the username at that moment (see
/// `roomdesk_core::auth::session`). Logout removes the cookie.
///
/// # Endpoints
///
/// - `GET/POST /cadastro_usuario` - registration form / submit
/// - `GET/POST /login` - login form / submit
/// - `GET /logout` - clear session

use crate::{
    app::AppState,
    error::AppResult,
    session::{OptionalSession, SessionUser},
};
use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use roomdesk_core::auth::{
    password::{hash_password, verify_password},
    session::{create_session_token, SessionClaims, SESSION_COOKIE},
};
use roomdesk_core::models::user::{CreateUser, User};
use serde::Deserialize;

/// Raw credentials form submission
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl CredentialsForm {
    /// Returns the trimmed username and password, or None if either is
    /// missing or empty
    fn parse(&self) -> Option<(&str, &str)> {
        fn text(field: &Option<String>) -> Option<&str> {
            field.as_deref().map(str::trim).filter(|s| !s.is_empty())
        }

        Some((text(&self.username)?, text(&self.password)?))
    }
}

#[derive(Template)]
#[template(path = "register.html")]
struct RegisterTemplate {
    session: Option<SessionUser>,
}

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    session: Option<SessionUser>,
    error: Option<String>,
}

/// Registration form
///
/// `GET /cadastro_usuario`
pub async fn register_form(OptionalSession(session): OptionalSession) -> AppResult<Html<String>> {
    let template = RegisterTemplate { session };
    Ok(Html(template.render()?))
}

/// Registration submit
///
/// `POST /cadastro_usuario`. Hashes the password, persists the user, and
/// redirects to the login view. A duplicate username surfaces as a 409
/// conflict page via the storage layer's unique constraint.
pub async fn register(
    OptionalSession(session): OptionalSession,
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> AppResult<Response> {
    let Some((username, password)) = form.parse() else {
        let template = RegisterTemplate { session };
        return Ok(Html(template.render()?).into_response());
    };

    let password_hash = hash_password(password)?;

    let user = User::create(
        &state.db,
        CreateUser {
            username: username.to_string(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");
    Ok(Redirect::to("/login").into_response())
}

/// Login form
///
/// `GET /login`
pub async fn login_form(OptionalSession(session): OptionalSession) -> AppResult<Html<String>> {
    let template = LoginTemplate {
        session,
        error: None,
    };
    Ok(Html(template.render()?))
}

/// Login submit
///
/// `POST /login`. On success sets the session cookie and redirects home; on
/// failure redisplays the form with a message and establishes no session.
pub async fn login(
    OptionalSession(session): OptionalSession,
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CredentialsForm>,
) -> AppResult<Response> {
    let Some((username, password)) = form.parse() else {
        let template = LoginTemplate {
            session,
            error: Some("Username and password are required".to_string()),
        };
        return Ok(Html(template.render()?).into_response());
    };

    let user = User::find_by_username(&state.db, username).await?;

    let valid = match &user {
        Some(user) => verify_password(password, &user.password_hash)?,
        None => false,
    };

    let Some(user) = user.filter(|_| valid) else {
        let template = LoginTemplate {
            session,
            error: Some("Invalid username or password".to_string()),
        };
        return Ok(Html(template.render()?).into_response());
    };

    let claims = SessionClaims::new(user.id, &user.username);
    let token = create_session_token(&claims, state.session_secret())?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    tracing::info!(user_id = user.id, admin = claims.admin, "User logged in");
    Ok((jar.add(cookie), Redirect::to("/")).into_response())
}

/// Logout
///
/// `GET /logout`. Removes the session cookie and redirects home.
pub async fn logout(jar: CookieJar) -> Response {
    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    (jar.remove(removal), Redirect::to("/")).into_response()
}
