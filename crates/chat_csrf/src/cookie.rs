//! The `csrf_token` cookie.
//!
//! The token travels to the client in a cookie that is readable by page
//! scripts (not http-only) so it can be echoed back in a request header or
//! form field; the double-submit comparison happens at the request handler,
//! not here.

use ::cookie::Cookie;

use crate::token::CsrfSecret;

pub const CSRF_COOKIE_NAME: &str = "csrf_token";

impl CsrfSecret {
    /// Generate a fresh token and wrap it in the response cookie:
    /// secure, root path, readable by scripts.
    pub fn issue_cookie(&self) -> Cookie<'static> {
        Cookie::build((CSRF_COOKIE_NAME, self.generate_token()))
            .http_only(false)
            .secure(true)
            .path("/")
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::CSRF_COOKIE_NAME;
    use crate::token::CsrfSecret;

    #[test]
    fn issued_cookie_has_the_documented_attributes() {
        let secret = CsrfSecret::new("test-secret").unwrap();
        let cookie = secret.issue_cookie();

        assert_eq!(cookie.name(), CSRF_COOKIE_NAME);
        assert_eq!(cookie.http_only(), Some(false));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn issued_cookie_value_validates() {
        let secret = CsrfSecret::new("test-secret").unwrap();
        let cookie = secret.issue_cookie();
        assert!(secret.validate_token(cookie.value()));
    }
}
