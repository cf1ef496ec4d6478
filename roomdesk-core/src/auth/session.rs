/// Session token generation and validation
///
/// The session is a signed HS256 token carried in an HTTP-only cookie. The
/// claims hold everything a handler needs to gate a request: the user id, the
/// username, and the admin flag. The signing secret comes from configuration
/// at process start; it is never compiled in.
///
/// # Admin determination
///
/// A user is an admin iff their username begins with [`ADMIN_SENTINEL`]. This
/// username-prefix convention is inherited from the original registry and is
/// almost certainly a stopgap rather than intended production logic.
/// TODO: replace the sentinel with a role column on the users table.
///
/// # Example
///
/// ```
/// use roomdesk_core::auth::session::{create_session_token, validate_session_token, SessionClaims};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let secret = "an-example-secret-of-at-least-32-bytes!!";
/// let token = create_session_token(&SessionClaims::new(7, "alice"), secret)?;
///
/// let claims = validate_session_token(&token, secret)?;
/// assert_eq!(claims.sub, 7);
/// assert!(!claims.admin);
/// # Ok(())
/// # }
/// ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Name of the session cookie set on login
pub const SESSION_COOKIE: &str = "roomdesk_session";

/// Username prefix that grants admin rights
pub const ADMIN_SENTINEL: char = '#';

/// Issuer claim stamped into every session token
const ISSUER: &str = "roomdesk";

/// Session lifetime
const SESSION_HOURS: i64 = 24;

/// Error type for session token operations
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Failed to create token
    #[error("Failed to create session token: {0}")]
    CreateError(String),

    /// Token is expired
    #[error("Session token has expired")]
    Expired,

    /// Token failed validation
    #[error("Invalid session token: {0}")]
    InvalidToken(String),
}

/// Claims carried by a session token
///
/// # Standard Claims
///
/// - `sub`: user id
/// - `iss`: always "roomdesk"
/// - `iat` / `exp` / `nbf`: issued-at, expiry, not-before timestamps
///
/// # Custom Claims
///
/// - `username`: login name, re-displayed in views
/// - `admin`: whether the user may mutate room records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject - user ID
    pub sub: i64,

    /// Login name
    pub username: String,

    /// Admin flag, derived from the username at login
    pub admin: bool,

    /// Issuer
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,
}

impl SessionClaims {
    /// Creates claims for a freshly authenticated user
    ///
    /// The admin flag is derived from the username prefix; see
    /// [`is_admin_username`].
    pub fn new(user_id: i64, username: &str) -> Self {
        let now = Utc::now();
        let expires = now + Duration::hours(SESSION_HOURS);

        Self {
            sub: user_id,
            username: username.to_string(),
            admin: is_admin_username(username),
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
            nbf: now.timestamp(),
        }
    }
}

/// Returns true if the username carries the admin sentinel prefix
pub fn is_admin_username(username: &str) -> bool {
    username.starts_with(ADMIN_SENTINEL)
}

/// Signs session claims into a token string
///
/// # Errors
///
/// Returns `SessionError::CreateError` if encoding fails.
pub fn create_session_token(claims: &SessionClaims, secret: &str) -> Result<String, SessionError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| SessionError::CreateError(e.to_string()))
}

/// Validates a session token and returns its claims
///
/// Checks the signature, expiry, not-before, and issuer.
///
/// # Errors
///
/// Returns `SessionError::Expired` for expired tokens and
/// `SessionError::InvalidToken` for every other validation failure.
pub fn validate_session_token(token: &str, secret: &str) -> Result<SessionClaims, SessionError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
        _ => SessionError::InvalidToken(e.to_string()),
    })?;

    Ok(data.claims)
}
