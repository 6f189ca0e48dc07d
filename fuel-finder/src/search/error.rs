//! Search error types.

/// Error from a station search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// A required request parameter was absent
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// The geocoder found no coordinates for the postal code
    #[error("Could not find the coordinates from the ZIP code: {0}")]
    UnresolvableLocation(String),

    /// An external collaborator failed or returned unusable data
    #[error("{service} unavailable: {message}")]
    UpstreamUnavailable {
        service: &'static str,
        message: String,
    },

    /// The request did not complete within the configured timeout
    #[error("search timed out")]
    Timeout,

    /// A search worker failed
    #[error("internal search error: {0}")]
    Internal(String),
}

impl SearchError {
    /// Build an `UpstreamUnavailable` error from any displayable cause.
    pub fn upstream(service: &'static str, cause: impl std::fmt::Display) -> Self {
        SearchError::UpstreamUnavailable {
            service,
            message: cause.to_string(),
        }
    }

    /// Whether the error was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SearchError::MissingParameter(_) | SearchError::UnresolvableLocation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SearchError::MissingParameter("ZIP");
        assert_eq!(err.to_string(), "Missing required parameter: ZIP");

        let err = SearchError::UnresolvableLocation("06551".into());
        assert_eq!(
            err.to_string(),
            "Could not find the coordinates from the ZIP code: 06551"
        );

        let err = SearchError::upstream("geospatial index", "connection refused");
        assert_eq!(
            err.to_string(),
            "geospatial index unavailable: connection refused"
        );

        assert_eq!(SearchError::Timeout.to_string(), "search timed out");
    }

    #[test]
    fn client_classification() {
        assert!(SearchError::MissingParameter("ZIP").is_client_error());
        assert!(SearchError::UnresolvableLocation("1".into()).is_client_error());
        assert!(!SearchError::upstream("geocoder", "down").is_client_error());
        assert!(!SearchError::Timeout.is_client_error());
        assert!(!SearchError::Internal("panic".into()).is_client_error());
    }
}
