/// Application state and router builder
///
/// This module defines the shared application state and provides a function
/// to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use roomdesk_web::{app::AppState, config::Config};
/// use roomdesk_core::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig {
///     url: config.database.url.clone(),
///     max_connections: config.database.max_connections,
///     ..Default::default()
/// })
/// .await?;
///
/// let state = AppState::new(pool, config);
/// let app = roomdesk_web::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{routing::get, Router};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. Uses Arc
/// internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets the session cookie signing secret
    pub fn session_secret(&self) -> &str {
        &self.config.session.secret
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Routes
///
/// ```text
/// /
/// ├── GET  /                     # Home view (public)
/// ├── GET  /health               # Health check (public)
/// ├── GET  /cadastro             # Room creation form   (logged-in + admin)
/// ├── POST /cadastro             # Room creation submit  (logged-in + admin)
/// ├── GET  /lista                # Room listing          (logged-in)
/// ├── GET  /excluir/:id          # Delete room           (logged-in + admin)
/// ├── GET  /atualizar/:id        # Room edit form        (logged-in + admin)
/// ├── POST /atualizar/:id        # Room edit submit      (logged-in + admin)
/// ├── GET  /cadastro_usuario     # Registration form (public)
/// ├── POST /cadastro_usuario     # Registration submit (public)
/// ├── GET  /login                # Login form (public)
/// ├── POST /login                # Login submit (public)
/// └── GET  /logout               # Clear session (public)
/// ```
///
/// Access gating happens in the handlers themselves: the `SessionUser`
/// extractor enforces the logged-in check, and each mutating room handler
/// performs its own admin check.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    Router::new()
        .route("/", get(routes::home::index))
        .route("/health", get(routes::health::health_check))
        .route(
            "/cadastro",
            get(routes::rooms::create_form).post(routes::rooms::create),
        )
        .route("/lista", get(routes::rooms::list))
        .route("/excluir/:id", get(routes::rooms::delete))
        .route(
            "/atualizar/:id",
            get(routes::rooms::edit_form).post(routes::rooms::update),
        )
        .route(
            "/cadastro_usuario",
            get(routes::users::register_form).post(routes::users::register),
        )
        .route(
            "/login",
            get(routes::users::login_form).post(routes::users::login),
        )
        .route("/logout", get(routes::users::logout))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
