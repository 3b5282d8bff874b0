use anyhow::{anyhow, Result};
use directories::{BaseDirs, ProjectDirs};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use folio_core::ProjectFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const LOCAL_CONFIG_FILE_NAME: &str = "folio.toml";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// GitHub user whose public repositories fill the gallery
    pub username: String,
    /// GitHub REST API base URL
    pub api_url: String,
    /// Global timeout for the listing request
    pub timeout_secs: u64,
    /// Delay of the simulated contact form delivery
    pub submit_delay_ms: u64,
    /// Gallery filter used when `projects list` gets no `--filter`
    pub default_filter: ProjectFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: "Galang0304".to_string(),
            api_url: github_feed::client::DEFAULT_BASE_URL.to_string(),
            timeout_secs: github_feed::client::DEFAULT_TIMEOUT.as_secs(),
            submit_delay_ms: folio_core::DEFAULT_SUBMIT_DELAY.as_millis() as u64,
            default_filter: ProjectFilter::All,
        }
    }
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        for path in config_paths(explicit_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed("FOLIO_"));

        figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    pub fn merge_with_cli(&mut self, cli_user: Option<String>, cli_api_url: Option<String>) {
        if let Some(user) = cli_user {
            self.username = user;
        }
        if let Some(url) = cli_api_url {
            self.api_url = url;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(anyhow!(
                "GitHub username not configured. Set via --user, FOLIO_USERNAME env var, or config file"
            ));
        }
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(anyhow!(
                "Invalid API URL '{}': expected an http:// or https:// URL",
                self.api_url
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

/// Config file that `load` would read first, if any exists
pub fn active_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    config_paths(explicit).into_iter().find(|p| p.exists())
}

/// Where a new config file should go when none exists yet
pub fn default_config_path() -> Option<PathBuf> {
    get_project_config_path().or_else(get_xdg_config_path)
}

fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_project_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_xdg_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_local_config_path() {
        push_unique(&mut paths, path);
    }

    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

fn get_project_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "folio").map(|d| d.config_dir().join("config.toml"))
}

fn get_xdg_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("folio").join("config.toml"));
    }

    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("folio")
            .join("config.toml")
    })
}

fn get_local_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join(LOCAL_CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    #[serial]
    fn loads_explicit_file_over_defaults() {
        let (_dir, path) = write_config(
            r#"
username = "octocat"
submit_delay_ms = 10
default_filter = "mobile-app"
"#,
        );

        let config = Config::load(Some(path)).unwrap();

        assert_eq!(config.username, "octocat");
        assert_eq!(config.submit_delay(), Duration::from_millis(10));
        assert_eq!(config.default_filter, ProjectFilter::MobileApp);
        assert_eq!(config.api_url, "https://api.github.com");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    #[serial]
    fn missing_explicit_file_is_an_error() {
        let err = Config::load(Some(PathBuf::from("/nonexistent/folio.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        let (_dir, path) = write_config("username = \"from-file\"\n");
        std::env::set_var("FOLIO_USERNAME", "from-env");

        let config = Config::load(Some(path));
        std::env::remove_var("FOLIO_USERNAME");

        assert_eq!(config.unwrap().username, "from-env");
    }

    #[test]
    #[serial]
    fn invalid_filter_value_is_rejected() {
        let (_dir, path) = write_config("default_filter = \"desktop\"\n");
        let err = Config::load(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn cli_values_win() {
        let mut config = Config::default();
        config.merge_with_cli(Some("cli-user".to_string()), Some("http://127.0.0.1:1".to_string()));

        assert_eq!(config.username, "cli-user");
        assert_eq!(config.api_url, "http://127.0.0.1:1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_user_and_bad_url() {
        let mut config = Config::default();
        config.username = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.api_url = "api.github.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn explicit_path_is_the_only_candidate() {
        let explicit = PathBuf::from("/tmp/custom.toml");
        assert_eq!(config_paths(Some(&explicit)), vec![explicit]);
    }
}
