use thiserror::Error;

/// Failures a weather lookup can run into.
///
/// Only [`WthError::MissingCredential`] is fatal to the process; every other
/// variant aborts the current report and nothing else.
#[derive(Debug, Error)]
pub enum WthError {
    #[error("{0} environment variable is not set.")]
    MissingCredential(&'static str),

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// The provider answered, but signalled a semantic error (e.g. unknown city).
    #[error("{message}")]
    Provider { message: String },
}

pub type Result<T, E = WthError> = std::result::Result<T, E>;
