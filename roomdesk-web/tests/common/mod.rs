/// Shared test harness for the end-to-end router tests
///
/// Builds the full application router over an in-memory SQLite database so
/// tests drive real handlers, templates, and SQL without a running server.

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use roomdesk_core::db::migrations::run_migrations;
use roomdesk_web::app::{build_router, AppState};
use roomdesk_web::config::{Config, DatabaseConfig, HttpConfig, SessionConfig};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::Service as _;

pub const TEST_SECRET: &str = "integration-test-secret-32-bytes!!!!";

pub struct TestContext {
    pub app: Router,
    pub db: SqlitePool,
}

impl TestContext {
    pub async fn new() -> Self {
        // One connection only: each connection to sqlite::memory: is its own
        // database.
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        run_migrations(&db).await.expect("Migrations should run");

        let config = Config {
            http: HttpConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            session: SessionConfig {
                secret: TEST_SECRET.to_string(),
            },
        };

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Self { app, db }
    }

    /// Sends a request through the router
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app
            .clone()
            .call(request)
            .await
            .expect("Request should not fail at the transport level")
    }

    /// Sends a GET request, optionally with a session cookie
    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        self.send(builder.body(Body::empty()).unwrap()).await
    }

    /// Sends a form-encoded POST request, optionally with a session cookie
    pub async fn post_form(
        &self,
        uri: &str,
        body: &str,
        cookie: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Registers a user and logs in, returning the session cookie
    pub async fn register_and_login(&self, username: &str, password: &str) -> String {
        let body = format!("username={}&password={}", username, password);

        let response = self.post_form("/cadastro_usuario", &body, None).await;
        assert_eq!(
            response.status(),
            StatusCode::SEE_OTHER,
            "Registration should redirect to login"
        );

        let response = self.post_form("/login", &body, None).await;
        assert_eq!(
            response.status(),
            StatusCode::SEE_OTHER,
            "Login should redirect home"
        );

        session_cookie(&response).expect("Login should set a session cookie")
    }
}

/// Extracts the session cookie (name=value) from a response
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    let raw = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    let pair = raw.split(';').next()?;
    if pair.starts_with("roomdesk_session=") {
        Some(pair.to_string())
    } else {
        None
    }
}

/// Reads the full response body as a string
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Body should be readable");
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Returns the Location header of a redirect response
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("Redirect should have a Location header")
        .to_str()
        .expect("Location should be valid UTF-8")
}
