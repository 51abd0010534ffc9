use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsrfError {
    #[error("CSRF secret is missing — set CSRF_SECRET before issuing tokens")]
    MissingSecret,
}
