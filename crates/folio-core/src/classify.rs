//! Mapping from a listed repository to a gallery record
//!
//! Every function here is pure: the same repository always yields the same record.

use crate::models::{Category, ProjectRecord, RemoteRepository};

pub const MISSING_DESCRIPTION: &str = "Project description not available.";

const MOBILE_LANGUAGES: [&str; 4] = ["Kotlin", "Java", "Swift", "Dart"];
const WEB_LANGUAGES: [&str; 4] = ["HTML", "JavaScript", "PHP", "TypeScript"];

/// Names that put a repository on the mobile side of image selection.
/// "Flutter" is matched against the language too, even though listings report it only as a topic.
const MOBILE_MARKERS: [&str; 5] = ["Kotlin", "Java", "Swift", "Dart", "Flutter"];

/// Placeholder image slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKey {
    Flutter,
    Kotlin,
    MobileDefault,
    React,
    JavaScript,
    Php,
    WebDefault,
}

const IMAGE_TABLE: [(ImageKey, &str); 7] = [
    (
        ImageKey::Flutter,
        "https://images.unsplash.com/photo-1617040619263-41c5a9ca7521?w=600&auto=format&fit=crop&q=60",
    ),
    (
        ImageKey::Kotlin,
        "https://images.unsplash.com/photo-1607252650355-f7fd0460ccdb?w=600&auto=format&fit=crop&q=60",
    ),
    (
        ImageKey::MobileDefault,
        "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=600&auto=format&fit=crop&q=60",
    ),
    (
        ImageKey::React,
        "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=600&auto=format&fit=crop&q=60",
    ),
    (
        ImageKey::JavaScript,
        "https://images.unsplash.com/photo-1627398242454-45a1465c2479?w=600&auto=format&fit=crop&q=60",
    ),
    (
        ImageKey::Php,
        "https://images.unsplash.com/photo-1599507593499-a3f7d7d97667?w=600&auto=format&fit=crop&q=60",
    ),
    (
        ImageKey::WebDefault,
        "https://images.unsplash.com/photo-1547658719-da2b51169166?w=600&auto=format&fit=crop&q=60",
    ),
];

impl ImageKey {
    pub const ALL: [ImageKey; 7] = [
        ImageKey::Flutter,
        ImageKey::Kotlin,
        ImageKey::MobileDefault,
        ImageKey::React,
        ImageKey::JavaScript,
        ImageKey::Php,
        ImageKey::WebDefault,
    ];

    pub fn url(self) -> &'static str {
        IMAGE_TABLE
            .iter()
            .find(|(key, _)| *key == self)
            .map(|(_, url)| *url)
            // IMAGE_TABLE has one row per variant
            .unwrap_or(IMAGE_TABLE[IMAGE_TABLE.len() - 1].1)
    }
}

/// Turn a repository name into a display title: hyphens and underscores become spaces
pub fn display_title(name: &str) -> String {
    name.replace(['-', '_'], " ")
}

/// Missing and empty descriptions both get the placeholder
pub fn display_description(description: Option<&str>) -> String {
    description
        .filter(|d| !d.is_empty())
        .unwrap_or(MISSING_DESCRIPTION)
        .to_string()
}

/// Category depends on the primary language alone
pub fn categorize(language: Option<&str>) -> Category {
    let language = language.unwrap_or("");
    if MOBILE_LANGUAGES.contains(&language) {
        Category::MobileApp
    } else if WEB_LANGUAGES.contains(&language) {
        Category::WebApp
    } else {
        Category::Other
    }
}

/// Primary language (when set) followed by the topics, in listing order
pub fn technologies(language: Option<&str>, topics: &[String]) -> Vec<String> {
    language
        .into_iter()
        .chain(topics.iter().map(String::as_str))
        .filter(|tech| !tech.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn has_topic(topics: &[String], topic: &str) -> bool {
    topics.iter().any(|t| t == topic)
}

/// Pick the placeholder image slot for a repository
pub fn select_image(language: Option<&str>, topics: &[String]) -> ImageKey {
    let language = language.unwrap_or("");

    let is_mobile = MOBILE_MARKERS.iter().any(|marker| {
        (!language.is_empty() && language.contains(marker))
            || has_topic(topics, &marker.to_lowercase())
    });

    if is_mobile {
        if has_topic(topics, "flutter") {
            ImageKey::Flutter
        } else if language == "Kotlin" {
            ImageKey::Kotlin
        } else {
            ImageKey::MobileDefault
        }
    } else if has_topic(topics, "react") {
        ImageKey::React
    } else if language == "JavaScript" {
        ImageKey::JavaScript
    } else if language == "PHP" {
        ImageKey::Php
    } else {
        ImageKey::WebDefault
    }
}

/// Derive the gallery record for one listed repository
pub fn to_project_record(repo: &RemoteRepository) -> ProjectRecord {
    let language = repo.primary_language.as_deref();

    ProjectRecord {
        title: display_title(&repo.name),
        description: display_description(repo.description.as_deref()),
        image_url: select_image(language, &repo.topics).url().to_string(),
        technologies: technologies(language, &repo.topics),
        category: categorize(language),
        source_url: repo.url.clone(),
    }
}
