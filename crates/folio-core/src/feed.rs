//! Project feed: repository listing → gallery records, with fallback

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::classify::to_project_record;
use crate::error::Result;
use crate::fallback::fallback_projects;
use crate::models::ProjectRecord;
use crate::traits::RepositorySource;
use crate::view::ViewEvent;

/// Banner text shown when the listing could not be loaded
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load projects";

/// Fetch and map the listing, keeping the error
pub fn fetch_projects(source: &dyn RepositorySource, username: &str) -> Result<Vec<ProjectRecord>> {
    debug!(username, "fetching repository listing");
    let repos = source.list_repositories(username)?;
    info!(username, count = repos.len(), "repository listing received");

    Ok(repos.iter().map(to_project_record).collect())
}

/// Resolve the project records for `username`
///
/// Never fails: any error is logged and becomes an empty list. Callers substitute
/// [`fallback_projects`] when the result is empty.
pub fn resolve(source: &dyn RepositorySource, username: &str) -> Vec<ProjectRecord> {
    fetch_projects(source, username).unwrap_or_else(|err| {
        warn!(username, error = %err, "repository listing unavailable");
        Vec::new()
    })
}

/// Why the fallback projects are shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "message", rename_all = "snake_case")]
pub enum FallbackReason {
    Empty,
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedOrigin {
    Remote,
    Fallback(FallbackReason),
}

/// Projects ready to render, plus where they came from
#[derive(Debug, Clone, Serialize)]
pub struct Feed {
    pub projects: Vec<ProjectRecord>,
    pub origin: FeedOrigin,
}

impl Feed {
    /// The view transition that settles a pending load with this feed
    pub fn into_event(self) -> ViewEvent {
        match self.origin {
            FeedOrigin::Fallback(FallbackReason::Unavailable(_)) => {
                ViewEvent::LoadFailure(LOAD_ERROR_MESSAGE.to_string())
            }
            _ => ViewEvent::LoadSuccess(self.projects),
        }
    }
}

/// Load the gallery for `username`, substituting the fallback projects when needed
pub fn load_feed(source: &dyn RepositorySource, username: &str) -> Feed {
    match fetch_projects(source, username) {
        Ok(projects) if !projects.is_empty() => Feed {
            projects,
            origin: FeedOrigin::Remote,
        },
        Ok(_) => {
            info!(username, "no projects found, using fallback data");
            Feed {
                projects: fallback_projects(),
                origin: FeedOrigin::Fallback(FallbackReason::Empty),
            }
        }
        Err(err) => {
            warn!(username, error = %err, "repository listing unavailable, using fallback data");
            Feed {
                projects: fallback_projects(),
                origin: FeedOrigin::Fallback(FallbackReason::Unavailable(err.to_string())),
            }
        }
    }
}
