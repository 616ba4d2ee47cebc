use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::content::LinkPolicy;
use crate::error::{Result, SiteError};
use crate::search::{IndexOptions, MatchOptions};

pub const PROJECT_CONFIG_FILE: &str = "roboline.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("ROBOLINE_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(&root.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("roboline/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| SiteError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| SiteError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.site {
            self.site.merge(patch);
        }
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
        if let Some(patch) = patch.content {
            self.content.merge(patch);
        }
        if let Some(patch) = patch.build {
            self.build.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("ROBOLINE_SITE_TITLE") {
            self.site.title = value;
        }

        if let Some(value) = env_f64("ROBOLINE_SEARCH_THRESHOLD")? {
            self.search.threshold = value;
        }
        if let Some(value) = env_usize("ROBOLINE_SEARCH_DISTANCE")? {
            self.search.distance = value;
        }
        if let Some(value) = env_usize("ROBOLINE_SEARCH_LOCATION")? {
            self.search.location = value;
        }
        if let Some(value) = env_bool("ROBOLINE_SEARCH_IGNORE_LOCATION") {
            self.search.ignore_location = value;
        }
        if let Some(value) = env_bool("ROBOLINE_SEARCH_IGNORE_FIELD_NORM") {
            self.search.ignore_field_norm = value;
        }
        if let Some(value) = env_bool("ROBOLINE_SEARCH_CASE_SENSITIVE") {
            self.search.case_sensitive = value;
        }

        if let Some(value) = env_string("ROBOLINE_CONTENT_DIR") {
            self.content.dir = Some(value);
        }
        if let Some(value) = env_bool("ROBOLINE_CONTENT_STRICT_LINKS") {
            self.content.strict_links = value;
        }

        if let Some(value) = env_string("ROBOLINE_BUILD_OUTPUT_DIR") {
            self.build.output_dir = value;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.search.threshold) {
            return Err(SiteError::Config(format!(
                "search.threshold must be within [0, 1], got {}",
                self.search.threshold
            )));
        }
        // TOML integers are i64.
        if i64::try_from(self.search.location).is_err() {
            return Err(SiteError::Config(format!(
                "search.location must be at most {}, got {}",
                i64::MAX,
                self.search.location
            )));
        }
        if self.build.output_dir.trim().is_empty() {
            return Err(SiteError::Config(
                "build.output_dir must be non-empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Serialize the effective configuration.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|err| SiteError::Serialization(format!("serialize config: {err}")))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let github_url = "https://github.com/roboline-project".to_string();
        Self {
            title: "RoboLine".to_string(),
            tagline: "Building the future through hands-on robotics education.".to_string(),
            base_url: "/".to_string(),
            contact_email: "contact@roboline.com".to_string(),
            social: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    url: github_url.clone(),
                },
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "https://linkedin.com/company/roboline".to_string(),
                },
                SocialLink {
                    label: "Twitter".to_string(),
                    url: "https://twitter.com/roboline_project".to_string(),
                },
                SocialLink {
                    label: "Email".to_string(),
                    url: "mailto:contact@roboline.com".to_string(),
                },
            ],
            github_url,
        }
    }
}

impl SiteConfig {
    fn merge(&mut self, patch: SitePatch) {
        if let Some(value) = patch.title {
            self.title = value;
        }
        if let Some(value) = patch.tagline {
            self.tagline = value;
        }
        if let Some(value) = patch.base_url {
            self.base_url = value;
        }
        if let Some(value) = patch.contact_email {
            self.contact_email = value;
        }
        if let Some(value) = patch.github_url {
            self.github_url = value;
        }
        if let Some(values) = patch.social {
            self.social = values;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub threshold: f64,
    #[serde(default)]
    pub location: usize,
    #[serde(default)]
    pub distance: usize,
    #[serde(default)]
    pub ignore_location: bool,
    #[serde(default)]
    pub ignore_field_norm: bool,
    #[serde(default)]
    pub case_sensitive: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let matching = MatchOptions::default();
        Self {
            threshold: matching.threshold,
            location: matching.location,
            distance: matching.distance,
            ignore_location: matching.ignore_location,
            ignore_field_norm: false,
            case_sensitive: matching.case_sensitive,
        }
    }
}

impl SearchConfig {
    fn merge(&mut self, patch: SearchPatch) {
        if let Some(value) = patch.threshold {
            self.threshold = value;
        }
        if let Some(value) = patch.location {
            self.location = value;
        }
        if let Some(value) = patch.distance {
            self.distance = value;
        }
        if let Some(value) = patch.ignore_location {
            self.ignore_location = value;
        }
        if let Some(value) = patch.ignore_field_norm {
            self.ignore_field_norm = value;
        }
        if let Some(value) = patch.case_sensitive {
            self.case_sensitive = value;
        }
    }

    #[must_use]
    pub const fn index_options(&self) -> IndexOptions {
        IndexOptions {
            matching: MatchOptions {
                threshold: self.threshold,
                location: self.location,
                distance: self.distance,
                ignore_location: self.ignore_location,
                case_sensitive: self.case_sensitive,
            },
            ignore_field_norm: self.ignore_field_norm,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory with `phases.toml` and `resources.toml`; embedded data when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    #[serde(default)]
    pub strict_links: bool,
}

impl ContentConfig {
    fn merge(&mut self, patch: ContentPatch) {
        if let Some(value) = patch.dir {
            self.dir = Some(value);
        }
        if let Some(value) = patch.strict_links {
            self.strict_links = value;
        }
    }

    #[must_use]
    pub const fn link_policy(&self) -> LinkPolicy {
        if self.strict_links {
            LinkPolicy::Strict
        } else {
            LinkPolicy::Permissive
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub output_dir: String,
    #[serde(default)]
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: "dist".to_string(),
            clean: false,
        }
    }
}

impl BuildConfig {
    fn merge(&mut self, patch: BuildPatch) {
        if let Some(value) = patch.output_dir {
            self.output_dir = value;
        }
        if let Some(value) = patch.clean {
            self.clean = value;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    site: Option<SitePatch>,
    search: Option<SearchPatch>,
    content: Option<ContentPatch>,
    build: Option<BuildPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct SitePatch {
    title: Option<String>,
    tagline: Option<String>,
    base_url: Option<String>,
    contact_email: Option<String>,
    github_url: Option<String>,
    social: Option<Vec<SocialLink>>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchPatch {
    threshold: Option<f64>,
    location: Option<usize>,
    distance: Option<usize>,
    ignore_location: Option<bool>,
    ignore_field_norm: Option<bool>,
    case_sensitive: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentPatch {
    dir: Option<String>,
    strict_links: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct BuildPatch {
    output_dir: Option<String>,
    clean: Option<bool>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|value| {
        matches!(
            value.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<usize>().map(Some).map_err(|err| {
            SiteError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

fn env_f64(key: &str) -> Result<Option<f64>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<f64>().map(Some).map_err(|err| {
            SiteError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}
