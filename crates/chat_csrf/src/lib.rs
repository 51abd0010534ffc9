//! chat_csrf — Stateless CSRF protection for Webchat
//!
//! Textbook token-generate/hash-compare: the server signs 32 random bytes
//! with a process-wide secret and hands the compound token to the client in
//! a cookie. Validation re-derives the signature — no per-token server
//! state, no expiry beyond the caller ceasing to accept tokens.
//!
//! The secret comes from `CSRF_SECRET` and is loaded once at startup via
//! [`CsrfSecret::from_env`]; absence is a fatal misconfiguration.

pub mod cookie;
pub mod error;
pub mod token;

pub use self::cookie::CSRF_COOKIE_NAME;
pub use error::CsrfError;
pub use token::{CsrfSecret, CSRF_SECRET_VAR};
