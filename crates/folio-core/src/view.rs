//! Portfolio view state
//!
//! `PortfolioView` is never mutated in place by callers: each [`ViewEvent`] produces the
//! next state through [`PortfolioView::apply`].

use serde::Serialize;

use crate::contact::{ContactForm, FormField};
use crate::fallback::fallback_projects;
use crate::models::{ProjectFilter, ProjectRecord, ProjectStats};

/// Result of a contact form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Sent,
    Failed(String),
}

/// Named transitions of the view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    LoadStart,
    LoadSuccess(Vec<ProjectRecord>),
    LoadFailure(String),
    FilterChanged(ProjectFilter),
    FormFieldChanged(FormField, String),
    SubmitStart,
    SubmitSettled(SubmitOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioView {
    pub loading: bool,
    pub error: Option<String>,
    pub projects: Vec<ProjectRecord>,
    pub filter: ProjectFilter,
    pub form: ContactForm,
    pub submitting: bool,
    pub submit_status: Option<SubmitOutcome>,
}

impl Default for PortfolioView {
    fn default() -> Self {
        // The gallery starts in the loading state until the listing settles
        Self {
            loading: true,
            error: None,
            projects: Vec::new(),
            filter: ProjectFilter::All,
            form: ContactForm::default(),
            submitting: false,
            submit_status: None,
        }
    }
}

impl PortfolioView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the state that follows `event`
    pub fn apply(self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::LoadStart => Self {
                loading: true,
                error: None,
                ..self
            },
            ViewEvent::LoadSuccess(projects) => Self {
                loading: false,
                projects: if projects.is_empty() {
                    fallback_projects()
                } else {
                    projects
                },
                ..self
            },
            ViewEvent::LoadFailure(message) => Self {
                loading: false,
                error: Some(message),
                projects: fallback_projects(),
                ..self
            },
            ViewEvent::FilterChanged(filter) => Self { filter, ..self },
            ViewEvent::FormFieldChanged(field, value) => Self {
                form: self.form.with_field(field, value),
                ..self
            },
            ViewEvent::SubmitStart => Self {
                submitting: true,
                submit_status: None,
                ..self
            },
            ViewEvent::SubmitSettled(SubmitOutcome::Sent) => Self {
                submitting: false,
                submit_status: Some(SubmitOutcome::Sent),
                form: ContactForm::default(),
                ..self
            },
            ViewEvent::SubmitSettled(outcome) => Self {
                submitting: false,
                submit_status: Some(outcome),
                ..self
            },
        }
    }

    /// Projects that pass the current filter, in listing order
    pub fn visible_projects(&self) -> Vec<&ProjectRecord> {
        self.projects
            .iter()
            .filter(|p| self.filter.matches(p.category))
            .collect()
    }

    pub fn stats(&self) -> ProjectStats {
        ProjectStats::from_projects(&self.projects)
    }
}
