use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("feed decoding error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("no tokio runtime to run the fetch on: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
    #[error("post not found: {0}")]
    NotFound(String),
}

impl RepositoryError {
    /// The fetch succeeded but no post carried the requested id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound(_))
    }

    /// Network, status, body decoding or custom transport faults.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            RepositoryError::Network(_) | RepositoryError::Decode(_) | RepositoryError::Transport(_)
        )
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid api url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("no configuration directory available")]
    NoConfigDir,
}
