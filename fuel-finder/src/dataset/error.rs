//! Dataset error types.

/// Errors that can occur when loading the stations dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading a local dataset file failed
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Dataset host returned an error status
    #[error("could not load stations data, status code: {status}")]
    Status { status: u16 },

    /// Failed to parse the dataset document
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DatasetError::Status { status: 403 };
        assert_eq!(
            err.to_string(),
            "could not load stations data, status code: 403"
        );

        let err = DatasetError::Io {
            path: "/data/stations.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "I/O error reading /data/stations.json: no such file"
        );
    }
}
