/// Authentication utilities
///
/// This module provides the authentication primitives for roomdesk:
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`session`]: Signed session tokens carried in the session cookie
///
/// The web crate decides *where* credentials come from (login form, cookie);
/// this module only implements the cryptographic operations on them.

pub mod password;
pub mod session;
