//! Remote collaborator error taxonomy
use reqwest;
use serde_json;

/// Remote filter failures. Transport errors, non-success statuses and
/// undecodable bodies all collapse into one failure class as far as the
/// fallback contract is concerned; the variants only keep diagnostics apart.
#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Remote filter parse error: {}", _0)]
    Parse(String),
    #[fail(display = "Remote filter connection error: {}", _0)]
    Connection(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Connection(format!("{}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(format!("{}", err))
    }
}
