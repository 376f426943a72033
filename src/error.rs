use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed recipe: {0}")]
    MalformedRecipe(String),

    #[error("API call quota reached for the day")]
    QuotaExceeded,

    #[error("API error: {0}")]
    Api(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get a sanitized error message safe for logging
    /// Filters out potentially sensitive information
    pub fn log_safe(&self) -> String {
        match self {
            // May include request URLs and headers
            Error::Http(_) => "External HTTP request failed".to_string(),

            Error::Api(msg) | Error::Internal(msg) => {
                let lower = msg.to_lowercase();
                if lower.contains("apikey") || lower.contains("secret") || lower.contains("key=")
                {
                    "API error (details redacted)".to_string()
                } else {
                    self.to_string()
                }
            }

            Error::Json(_) => "Failed to decode JSON".to_string(),
            Error::Io(_) => "File system operation failed".to_string(),
            Error::Config(_)
            | Error::NotFound(_)
            | Error::Validation(_)
            | Error::MalformedRecipe(_)
            | Error::QuotaExceeded => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_safe_redacts_api_keys() {
        let err = Error::Api("GET /recipes/random?apiKey=abc123 failed".to_string());
        assert_eq!(err.log_safe(), "API error (details redacted)");

        let err = Error::Api("HTTP 500".to_string());
        assert_eq!(err.log_safe(), "API error: HTTP 500");
    }

    #[test]
    fn test_log_safe_passes_through_domain_errors() {
        assert_eq!(
            Error::NotFound("ingredient 42".to_string()).log_safe(),
            "Not found: ingredient 42"
        );
        assert_eq!(
            Error::QuotaExceeded.log_safe(),
            "API call quota reached for the day"
        );
    }
}
