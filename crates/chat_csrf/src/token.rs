//! Token generation and validation.
//!
//! Token format: `raw:signature`, where `raw` is 32 random bytes hex-encoded
//! and `signature` = hex(SHA-256(raw || secret)). Stateless — no record of
//! issued tokens is kept; validity is re-derived from the secret at check
//! time.

use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::ZeroizeOnDrop;

use crate::error::CsrfError;

/// Environment variable holding the signing secret.
pub const CSRF_SECRET_VAR: &str = "CSRF_SECRET";

const RAW_LEN: usize = 32;

/// Server-side signing secret. Load once at startup and share; a missing
/// secret is a fatal misconfiguration, not something to limp past.
/// Zeroized on drop.
#[derive(ZeroizeOnDrop)]
pub struct CsrfSecret {
    secret: String,
}

impl CsrfSecret {
    /// Load the secret from `CSRF_SECRET`. Unset or empty is an error.
    pub fn from_env() -> Result<Self, CsrfError> {
        match std::env::var(CSRF_SECRET_VAR) {
            Ok(secret) => Self::new(secret),
            Err(_) => Err(CsrfError::MissingSecret),
        }
    }

    pub fn new(secret: impl Into<String>) -> Result<Self, CsrfError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(CsrfError::MissingSecret);
        }
        Ok(Self { secret })
    }

    /// Draw fresh randomness and sign it: `raw:signature`.
    pub fn generate_token(&self) -> String {
        let mut raw = [0u8; RAW_LEN];
        rand::rngs::OsRng.fill_bytes(&mut raw);
        let raw = hex::encode(raw);
        let signature = self.sign(&raw);
        format!("{raw}:{signature}")
    }

    /// Check a presented token. Malformed tokens (no `:`, empty halves) are
    /// invalid, not errors. The signature comparison is constant-time.
    pub fn validate_token(&self, token: &str) -> bool {
        let Some((raw, signature)) = token.split_once(':') else {
            return false;
        };
        if raw.is_empty() || signature.is_empty() {
            return false;
        }
        let expected = self.sign(raw);
        expected.as_bytes().ct_eq(signature.as_bytes()).into()
    }

    fn sign(&self, raw: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(raw.as_bytes());
        hasher.update(self.secret.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::{CsrfSecret, CSRF_SECRET_VAR};
    use crate::error::CsrfError;

    fn secret() -> CsrfSecret {
        CsrfSecret::new("test-secret").unwrap()
    }

    #[test]
    fn generated_token_round_trips() {
        let secret = secret();
        let token = secret.generate_token();
        assert!(secret.validate_token(&token));
    }

    #[test]
    fn token_shape_is_raw_colon_signature() {
        let token = secret().generate_token();
        let (raw, signature) = token.split_once(':').expect("delimiter");
        assert_eq!(raw.len(), 64);
        assert_eq!(signature.len(), 64);
        assert!(raw.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn two_tokens_differ() {
        let secret = secret();
        assert_ne!(secret.generate_token(), secret.generate_token());
    }

    #[test]
    fn malformed_tokens_are_invalid() {
        let secret = secret();
        assert!(!secret.validate_token(""));
        assert!(!secret.validate_token("no-delimiter"));
        assert!(!secret.validate_token(":signature-only"));
        assert!(!secret.validate_token("raw-only:"));
        assert!(!secret.validate_token(":"));
    }

    #[test]
    fn tampered_raw_is_invalid() {
        let secret = secret();
        let token = secret.generate_token();
        let mut bytes = token.into_bytes();
        bytes[0] = if bytes[0] == b'0' { b'1' } else { b'0' };
        let tampered = String::from_utf8(bytes).unwrap();
        assert!(!secret.validate_token(&tampered));
    }

    #[test]
    fn tampered_signature_is_invalid() {
        let secret = secret();
        let token = secret.generate_token();
        let mut bytes = token.into_bytes();
        let last = bytes.len() - 1;
        bytes[last] = if bytes[last] == b'0' { b'1' } else { b'0' };
        let tampered = String::from_utf8(bytes).unwrap();
        assert!(!secret.validate_token(&tampered));
    }

    #[test]
    fn token_is_bound_to_its_secret() {
        let token = CsrfSecret::new("secret-a").unwrap().generate_token();
        assert!(!CsrfSecret::new("secret-b").unwrap().validate_token(&token));
    }

    #[test]
    fn empty_secret_is_rejected() {
        assert!(matches!(CsrfSecret::new(""), Err(CsrfError::MissingSecret)));
    }

    #[test]
    fn from_env_requires_the_variable() {
        std::env::remove_var(CSRF_SECRET_VAR);
        assert!(matches!(CsrfSecret::from_env(), Err(CsrfError::MissingSecret)));

        std::env::set_var(CSRF_SECRET_VAR, "");
        assert!(matches!(CsrfSecret::from_env(), Err(CsrfError::MissingSecret)));

        std::env::set_var(CSRF_SECRET_VAR, "env-secret");
        let secret = CsrfSecret::from_env().expect("secret set");
        assert!(secret.validate_token(&secret.generate_token()));
        std::env::remove_var(CSRF_SECRET_VAR);
    }
}
