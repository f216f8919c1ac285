/// Failures while acquiring posts from the remote source.
///
/// These never leave `PostProvider`; they are logged and replaced by an
/// empty collection there.
#[derive(Debug, thiserror::Error)]
pub enum PostSourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Post source returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed post payload: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PostSourceError>;
