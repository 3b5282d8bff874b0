use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use folio_core::ProjectFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Personal portfolio in the terminal")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a TOML config file
    #[arg(long, env = "FOLIO_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// GitHub user whose repositories fill the gallery (overrides config file)
    #[arg(long, short = 'u', global = true)]
    pub user: Option<String>,

    /// GitHub API base URL (overrides config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project gallery
    #[command(visible_alias = "p")]
    Projects {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Send a message through the contact form
    Contact {
        /// Your name
        #[arg(long, short = 'n')]
        name: String,
        /// Your email address
        #[arg(long, short = 'e')]
        email: String,
        /// Message text
        #[arg(long, short = 'm')]
        message: String,
    },
    /// About me, education, experience, skills, blog and links
    Profile {
        /// Section to show (all sections when omitted)
        #[arg(value_enum)]
        section: Option<ProfileSection>,
    },
    /// Configuration
    #[command(visible_alias = "cfg")]
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List projects (GitHub repositories, or the built-in samples)
    #[command(visible_alias = "ls")]
    List {
        /// Only show projects of this type (defaults to the configured filter)
        #[arg(long, short = 'f', value_enum)]
        filter: Option<FilterArg>,
    },
    /// Project counts by type
    Stats,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum FilterArg {
    All,
    #[value(alias = "web-app")]
    Web,
    #[value(alias = "mobile-app")]
    Mobile,
}

impl From<FilterArg> for ProjectFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => ProjectFilter::All,
            FilterArg::Web => ProjectFilter::WebApp,
            FilterArg::Mobile => ProjectFilter::MobileApp,
        }
    }
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum ProfileSection {
    About,
    Education,
    Experience,
    Skills,
    Stack,
    Journey,
    Achievements,
    Blog,
    Links,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Show the config file path in use
    Path,
}
