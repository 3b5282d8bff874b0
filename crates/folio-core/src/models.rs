use serde::{Deserialize, Serialize};
use std::fmt;

/// Repository as reported by a listing service (read-only input to the resolver)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRepository {
    pub name: String,
    pub description: Option<String>,
    /// Canonical web URL of the repository
    pub url: String,
    #[serde(default)]
    pub topics: Vec<String>,
    pub primary_language: Option<String>,
}

/// Project classification shown as a badge and used by the gallery filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Mobile App")]
    MobileApp,
    #[serde(rename = "Web App")]
    WebApp,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::MobileApp => "Mobile App",
            Category::WebApp => "Web App",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the project gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Primary language first, then topics. Never contains blank entries.
    pub technologies: Vec<String>,
    pub category: Category,
    /// Repository URL, also used as the display key
    pub source_url: String,
}

/// Gallery filter selected by the visitor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectFilter {
    #[default]
    All,
    WebApp,
    MobileApp,
}

impl ProjectFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::WebApp => category == Category::WebApp,
            ProjectFilter::MobileApp => category == Category::MobileApp,
        }
    }
}

/// Headline counters derived from the current project list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub total: usize,
    pub mobile_apps: usize,
    pub web_apps: usize,
}

impl ProjectStats {
    pub fn from_projects(projects: &[ProjectRecord]) -> Self {
        let count = |category: Category| projects.iter().filter(|p| p.category == category).count();
        Self {
            total: projects.len(),
            mobile_apps: count(Category::MobileApp),
            web_apps: count(Category::WebApp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: Category) -> ProjectRecord {
        ProjectRecord {
            title: "demo".to_string(),
            description: "demo".to_string(),
            image_url: String::new(),
            technologies: Vec::new(),
            category,
            source_url: "https://github.com/demo/demo".to_string(),
        }
    }

    #[test]
    fn category_serializes_as_display_label() {
        let json = serde_json::to_string(&Category::MobileApp).unwrap();
        assert_eq!(json, r#""Mobile App""#);

        let parsed: Category = serde_json::from_str(r#""Web App""#).unwrap();
        assert_eq!(parsed, Category::WebApp);
    }

    #[test]
    fn filter_matches_only_its_category() {
        assert!(ProjectFilter::All.matches(Category::Other));
        assert!(ProjectFilter::WebApp.matches(Category::WebApp));
        assert!(!ProjectFilter::WebApp.matches(Category::MobileApp));
        assert!(ProjectFilter::MobileApp.matches(Category::MobileApp));
        assert!(!ProjectFilter::MobileApp.matches(Category::Other));
    }

    #[test]
    fn stats_count_by_category() {
        let projects = vec![
            record(Category::MobileApp),
            record(Category::WebApp),
            record(Category::MobileApp),
            record(Category::Other),
        ];

        let stats = ProjectStats::from_projects(&projects);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.mobile_apps, 2);
        assert_eq!(stats.web_apps, 1);
    }
}
