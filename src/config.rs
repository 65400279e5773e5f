use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::urls::normalize_base_url;
use crate::version::TrackerVersion;

/// Tracker settings for one annotation run.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Root URL of the tracker; read through [`Config::base_url`]
    pub base_url: String,
    /// Tracker release in `X.Y.Z` form; selects the issue URL layout
    pub version_number: Option<String>,
    /// Comma separated trigger words; `*` means a bare `#<number>`
    pub keywords: Option<String>,
    /// Tracker project identifier, used for the project page URL
    pub project: Option<String>,
    /// XML-escape the annotated text
    pub escape: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            version_number: None,
            keywords: None,
            project: None,
            escape: true,
        }
    }
}

impl Config {
    /// The base URL with a trailing `/`.
    pub fn base_url(&self) -> String {
        normalize_base_url(&self.base_url)
    }

    pub fn has_base_url(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    /// Non-fatal problems with these settings.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.has_base_url() {
            warnings.push("base_url is empty".to_string());
        }

        if let Some(version) = self.version_number.as_deref()
            && !version.trim().is_empty()
            && let Err(e) = version.parse::<TrackerVersion>()
        {
            warnings.push(format!("{e}; using current issue URLs"));
        }

        if let Some(project) = self.project.as_deref()
            && project.trim().is_empty()
        {
            warnings.push("project is empty".to_string());
        }

        warnings
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn version_number(mut self, version: impl Into<String>) -> Self {
        self.config.version_number = Some(version.into());
        self
    }

    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.config.keywords = Some(keywords.into());
        self
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.config.project = Some(project.into());
        self
    }

    pub fn escape(mut self, escape: bool) -> Self {
        self.config.escape = escape;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".refmark.toml", "refmark.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    for warning in config.validate() {
        log::warn!("{}: {}", path.display(), warning);
    }
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("refmark").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    if let Some(home) = dirs::home_dir() {
        let p = home.join(".config").join("refmark").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    None
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .refmark.toml, refmark.toml
/// 3) XDG: $XDG_CONFIG_HOME/refmark/config.toml or ~/.config/refmark/config.toml
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir)
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    if let Some(p) = xdg_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
