use serde::{Deserialize, Serialize};

/// Repository entry from `GET /users/{username}/repos`
///
/// Only the fields the portfolio reads; everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubRepo {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    pub language: Option<String>,
}
