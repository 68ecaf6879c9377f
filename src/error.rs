//! Error types.

use reqwest::StatusCode;

/// Any error that can occur while checking an inventory.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An invalid parameter was given.
    #[error("Invalid parameter: {}", .0)]
    Parameter(&'static str),
    /// The request could not reach the host (DNS, connection, timeout).
    #[error("{}", .0)]
    Network(#[from] reqwest::Error),
    /// The host responded with a status other than 200.
    #[error("HTTP Error: {}", .0.as_u16())]
    Http(StatusCode),
    /// The captured text was not valid JSON.
    #[error("{}", .0)]
    Parse(#[from] serde_json::Error),
    /// The page contained data in an unexpected shape.
    #[error("Malformed response: {}", .0)]
    MalformedResponse(String),
    /// The extraction pattern could not be used.
    #[error("Invalid pattern: {}", .0)]
    Pattern(String),
    /// A request header could not be used.
    #[error("Invalid header: {}", .0)]
    Header(String),
}

impl From<reqwest::header::InvalidHeaderName> for Error {
    fn from(error: reqwest::header::InvalidHeaderName) -> Error {
        Error::Header(error.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for Error {
    fn from(error: reqwest::header::InvalidHeaderValue) -> Error {
        Error::Header(error.to_string())
    }
}

impl From<lazy_regex::regex::Error> for Error {
    fn from(error: lazy_regex::regex::Error) -> Error {
        Error::Pattern(error.to_string())
    }
}
