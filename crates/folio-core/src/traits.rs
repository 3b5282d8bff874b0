use crate::error::Result;
use crate::models::RemoteRepository;

/// A service that lists the public repositories of a user
///
/// Implementations issue a single request per call. No retries, no pagination.
pub trait RepositorySource: Send + Sync {
    /// List repositories for `username`, in the order the service returns them
    fn list_repositories(&self, username: &str) -> Result<Vec<RemoteRepository>>;
}

/// A validated contact form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Capability to deliver a contact message
pub trait MessageSender {
    fn send(&self, message: &ContactMessage) -> Result<()>;
}
