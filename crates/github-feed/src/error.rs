use folio_core::FolioError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, GitHubError>;

impl From<GitHubError> for FolioError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Http(e) => FolioError::Http(e.to_string()),
            GitHubError::Parse(e) => FolioError::Parse(e.to_string()),
            GitHubError::UserNotFound(user) => FolioError::UserNotFound(user),
            GitHubError::Api { status, message } => FolioError::Api { status, message },
        }
    }
}
