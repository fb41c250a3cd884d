//! Frontend error taxonomy. Transport and decoding failures live here; server
//! side validation messages do not, they ride inside a 2xx submission envelope
//! and are rendered as field errors instead.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn display_includes_http_status() {
        let error = AppError::Http {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(error.to_string(), "Request failed (502): Bad Gateway");
    }

    #[test]
    fn display_labels_timeouts_distinctly_from_network_errors() {
        let timeout = AppError::Timeout("Request timed out.".to_string());
        let network = AppError::Network("connection refused".to_string());
        assert!(timeout.to_string().starts_with("Timeout:"));
        assert!(network.to_string().starts_with("Network error:"));
    }
}
