// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Fetch(FetchError),
}

/// Failure modes of a single APOD request.
///
/// One variant per layer: the HTTP exchange itself, the transport below it,
/// and the payload decode above it. All three collapse to the same generic
/// gallery message for the user; the variant only matters for logs.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// The server answered with a non-success status code.
    HttpStatus(u16),

    /// The request never completed (network unreachable, timeout, TLS).
    Transport(String),

    /// The response body was not a well-formed APOD payload.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::HttpStatus(code) => write!(f, "HTTP status {}", code),
            FetchError::Transport(msg) => write!(f, "Transport failure: {}", msg),
            FetchError::Decode(msg) => write!(f, "Malformed payload: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
        }
    }
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_http_status() {
        let err = FetchError::HttpStatus(429);
        assert_eq!(format!("{}", err), "HTTP status 429");
    }

    #[test]
    fn display_formats_transport_failure() {
        let err = FetchError::Transport("connection refused".to_string());
        assert!(format!("{}", err).contains("connection refused"));
    }

    #[test]
    fn from_fetch_error_produces_fetch_variant() {
        let err: Error = FetchError::Decode("expected an array".to_string()).into();
        match err {
            Error::Fetch(FetchError::Decode(message)) => {
                assert!(message.contains("expected an array"));
            }
            _ => panic!("expected Fetch variant"),
        }
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }
}
