// Errors raised while loading users. All of them are reported to the
// console by the controller and never terminate the process.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The request never produced a response (connect, DNS, body read).
    #[error("transport error: {0}")]
    Transport(String),
    /// The server answered with a status outside 200..300.
    #[error("HTTP error: {0}")]
    HttpStatus(u16),
    /// The body was not syntactically valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_carries_code() {
        assert_eq!(LoadError::HttpStatus(503).to_string(), "HTTP error: 503");
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(LoadError::from(err), LoadError::Parse(_)));
    }
}
