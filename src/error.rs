use std::path::PathBuf;

/// Problems with the run configuration, detected before any request is sent.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Must provide --token or set TRACKSUIT_API_TOKEN")]
    MissingToken,

    #[error("Token does not look like a JWT")]
    MalformedToken,

    #[error("Directory does not exist: {}", .0.display())]
    MissingDestDir(PathBuf),

    #[error("Concurrency must be at least 1")]
    ZeroConcurrency,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The API answered with a non-success status. `reason` is the standard
    /// phrase for the code (reqwest does not expose the one on the wire);
    /// whatever the server sent in the body is kept in `body`.
    #[error("{reason} ({status}) for {path}: {body}")]
    UnexpectedStatus {
        status: u16,
        reason: String,
        path: String,
        body: String,
    },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("could not decode response from {path}: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },

    #[error("could not encode funnel data: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("download task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
