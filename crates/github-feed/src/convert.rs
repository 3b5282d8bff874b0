//! Model conversions from GitHub types to folio-core types

use folio_core::RemoteRepository;

use crate::models::GitHubRepo;

impl From<GitHubRepo> for RemoteRepository {
    fn from(r: GitHubRepo) -> Self {
        Self {
            name: r.name,
            description: r.description,
            url: r.html_url,
            topics: r.topics.unwrap_or_default(),
            primary_language: r.language,
        }
    }
}
