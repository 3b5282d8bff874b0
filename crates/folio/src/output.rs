use crate::cli::OutputFormat;
use colored::Colorize;
use crate::commands::projects::HeroStats;
use folio_core::content::{
    Achievement, Affiliation, BlogPost, Experience, Milestone, Profile, Skill, SocialLink,
    TechGroup,
};
use folio_core::{Category, ProjectRecord, ProjectStats};
use serde::Serialize;

const SKILL_BAR_WIDTH: usize = 20;

pub fn output_result<T: Serialize + Displayable>(result: &T, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(result) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            println!("{}", result.display());
        }
    }
}

pub fn output_list<T: Serialize + Displayable>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(&items) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            for item in items {
                println!("{}", item.display());
                println!();
            }
        }
    }
}

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub code: String,
    pub message: String,
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let message = match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                code: "error".to_string(),
                message: format!("{:#}", err),
            };
            serde_json::to_string_pretty(&json_err).unwrap_or_else(|_| {
                format!(r#"{{"error": true, "message": "{}"}}"#, err)
            })
        }
        OutputFormat::Text => format!("{}: {:#}", "Error".red().bold(), err),
    };
    eprintln!("{}", message);
}

/// Inline banner printed above the gallery (text mode only)
pub fn output_banner(message: &str) {
    eprintln!("{}", message.red());
}

pub trait Displayable {
    fn display(&self) -> String;
}

impl<T: Displayable> Displayable for &T {
    fn display(&self) -> String {
        (*self).display()
    }
}

fn colorize_category(category: Category) -> String {
    match category {
        Category::MobileApp => category.label().green().to_string(),
        Category::WebApp => category.label().blue().to_string(),
        Category::Other => category.label().dimmed().to_string(),
    }
}

impl Displayable for ProjectRecord {
    fn display(&self) -> String {
        let mut output = format!(
            "{} [{}]\n  {}\n  {}: {}",
            self.title.white().bold(),
            colorize_category(self.category),
            self.description,
            "GitHub".dimmed(),
            self.source_url.cyan()
        );

        if !self.technologies.is_empty() {
            let techs: Vec<String> = self
                .technologies
                .iter()
                .map(|t| t.magenta().to_string())
                .collect();
            output.push_str(&format!("\n  {}: {}", "Tech".dimmed(), techs.join(", ")));
        }

        output.push_str(&format!("\n  {}: {}", "Image".dimmed(), self.image_url.dimmed()));
        output
    }
}

impl Displayable for ProjectStats {
    fn display(&self) -> String {
        format!(
            "{:>4}+  {}\n{:>4}+  {}\n{:>4}+  {}",
            self.total.to_string().cyan().bold(),
            "GitHub Projects",
            self.mobile_apps.to_string().green().bold(),
            "Mobile Apps",
            self.web_apps.to_string().blue().bold(),
            "Web Projects"
        )
    }
}

impl Displayable for HeroStats {
    fn display(&self) -> String {
        format!(
            "{}\n{:>4}+  {}",
            self.projects.display(),
            self.years_coding.to_string().yellow().bold(),
            "Years Coding"
        )
    }
}

impl Displayable for Affiliation {
    fn display(&self) -> String {
        format!("{}\n  {}", self.name.white().bold(), self.details)
    }
}

impl Displayable for Experience {
    fn display(&self) -> String {
        format!(
            "{} @ {} ({})\n  {}",
            self.role.white().bold(),
            self.company.cyan(),
            self.period.dimmed(),
            self.description
        )
    }
}

pub fn skill_bar(progress: u8) -> String {
    let filled = (usize::from(progress.min(100)) * SKILL_BAR_WIDTH) / 100;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(SKILL_BAR_WIDTH - filled)
    )
}

impl Displayable for Skill {
    fn display(&self) -> String {
        format!(
            "{:<32} {} {:>3}%",
            self.name,
            skill_bar(self.progress).green(),
            self.progress
        )
    }
}

impl Displayable for TechGroup {
    fn display(&self) -> String {
        format!("{:<10} {}", self.group.dimmed(), self.items.join(", "))
    }
}

impl Displayable for Milestone {
    fn display(&self) -> String {
        format!(
            "{} {}\n  {}",
            self.year.cyan().bold(),
            self.title.white().bold(),
            self.description
        )
    }
}

impl Displayable for Achievement {
    fn display(&self) -> String {
        format!("{}\n  {}", self.title.white().bold(), self.description)
    }
}

impl Displayable for BlogPost {
    fn display(&self) -> String {
        format!(
            "{} {}\n  {}",
            self.date.cyan(),
            self.title.white().bold(),
            self.excerpt
        )
    }
}

impl Displayable for SocialLink {
    fn display(&self) -> String {
        match self.url {
            Some(url) => format!("{}: {}", self.label.dimmed(), url.cyan()),
            None => self.label.to_string(),
        }
    }
}

impl Displayable for Profile {
    fn display(&self) -> String {
        format!(
            "{}\n{}\n{}\n\n{}",
            self.name.white().bold(),
            self.role.cyan(),
            self.tagline.dimmed(),
            self.about
        )
    }
}
