use anyhow::Error;

/// Coarse cause of a failed remote call, used for the sync status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    ClientError,  // Other HTTP 4xx
    Decode,       // Body was not the expected JSON
    NetworkError, // DNS, routing, etc.
    Other,
}

impl ErrorType {
    /// Short label shown in "Status: Sync failed (<label>)"
    pub fn label(&self) -> &'static str {
        match self {
            ErrorType::ConnectionRefused => "connection refused",
            ErrorType::Timeout => "timed out",
            ErrorType::NotFound => "endpoint not found",
            ErrorType::ServerError => "server error",
            ErrorType::ClientError => "request rejected",
            ErrorType::Decode => "unexpected response",
            ErrorType::NetworkError => "network unavailable",
            ErrorType::Other => "error",
        }
    }
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    // Check for HTTP status codes and reqwest error kinds first
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            if let Some(status) = reqwest_err.status() {
                return match status.as_u16() {
                    404 => ErrorType::NotFound,
                    400..=499 => ErrorType::ClientError,
                    500..=599 => ErrorType::ServerError,
                    _ => ErrorType::Other,
                };
            }
            if reqwest_err.is_timeout() {
                return ErrorType::Timeout;
            }
            if reqwest_err.is_decode() {
                return ErrorType::Decode;
            }
        }
        if cause.is::<serde_json::Error>() {
            return ErrorType::Decode;
        }
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for the debug log - show raw error details
pub fn format_error_message(error: &Error) -> String {
    // Walk the error chain to find reqwest::Error (most informative for network errors)
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
    }

    // Otherwise report the root cause
    error
        .chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| error.to_string())
}
