use crate::cli::{OutputFormat, ProjectCommands};
use crate::output::{output_banner, output_list, output_result};
use anyhow::Result;
use folio_core::content::profile;
use folio_core::{
    load_feed, FeedOrigin, PortfolioView, ProjectFilter, ProjectRecord, ProjectStats,
    RepositorySource, ViewEvent,
};
use serde::Serialize;

/// JSON shape of `projects list`
#[derive(Serialize)]
struct ProjectListing<'a> {
    origin: &'a FeedOrigin,
    error: Option<&'a str>,
    filter: ProjectFilter,
    projects: Vec<&'a ProjectRecord>,
}

/// Headline counters: project counts plus years of coding
#[derive(Serialize)]
pub struct HeroStats {
    #[serde(flatten)]
    pub projects: ProjectStats,
    pub years_coding: u8,
}

pub fn handle_projects(
    source: &dyn RepositorySource,
    username: &str,
    default_filter: ProjectFilter,
    action: &ProjectCommands,
    format: OutputFormat,
) -> Result<()> {
    match action {
        ProjectCommands::List { filter } => {
            let filter = filter.map(ProjectFilter::from).unwrap_or(default_filter);
            handle_list(source, username, filter, format)
        }
        ProjectCommands::Stats => handle_stats(source, username, format),
    }
}

/// Run the gallery load through the view state
fn load_view(source: &dyn RepositorySource, username: &str) -> (PortfolioView, FeedOrigin) {
    let view = PortfolioView::new().apply(ViewEvent::LoadStart);
    let feed = load_feed(source, username);
    let origin = feed.origin.clone();
    (view.apply(feed.into_event()), origin)
}

fn handle_list(
    source: &dyn RepositorySource,
    username: &str,
    filter: ProjectFilter,
    format: OutputFormat,
) -> Result<()> {
    let (view, origin) = load_view(source, username);
    let view = view.apply(ViewEvent::FilterChanged(filter));
    let visible = view.visible_projects();

    match format {
        OutputFormat::Json => {
            let listing = ProjectListing {
                origin: &origin,
                error: view.error.as_deref(),
                filter: view.filter,
                projects: visible,
            };
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Text => {
            if let Some(error) = &view.error {
                output_banner(error);
            }
            if visible.is_empty() {
                println!("No projects match this filter.");
            } else {
                output_list(&visible, format);
            }
        }
    }
    Ok(())
}

fn handle_stats(source: &dyn RepositorySource, username: &str, format: OutputFormat) -> Result<()> {
    let (view, _) = load_view(source, username);
    if format == OutputFormat::Text {
        if let Some(error) = &view.error {
            output_banner(error);
        }
    }
    let stats = HeroStats {
        projects: view.stats(),
        years_coding: profile().years_coding,
    };
    output_result(&stats, format);
    Ok(())
}
