//! Implementation of folio-core traits for GitHubClient

use folio_core::{FolioError, RemoteRepository, RepositorySource, Result};

use crate::client::GitHubClient;

impl RepositorySource for GitHubClient {
    fn list_repositories(&self, username: &str) -> Result<Vec<RemoteRepository>> {
        let repos = self.list_user_repos(username).map_err(FolioError::from)?;
        Ok(repos.into_iter().map(RemoteRepository::from).collect())
    }
}
