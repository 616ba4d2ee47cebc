//! Static site generation.

pub mod html;
pub mod markdown;
pub mod pages;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::content::{ContentStore, Phase, Resource, ResourceKind};
use crate::error::{Result, SiteError};
use crate::search::{SearchController, TagCount};

pub use html::{NavItem, TagSlugs, escape, slug};
pub use markdown::render_markdown;
pub use pages::Pages;

const STYLESHEET: &str = include_str!("../../assets/site.css");

/// Summary of a finished build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub pages: usize,
    pub tags: usize,
    pub files: Vec<String>,
    pub built_at: DateTime<Utc>,
}

/// Payload of `search.json`, an index of the site for external tools.
#[derive(Debug, Serialize)]
pub struct SearchDocument<'a> {
    pub tags: Vec<TagEntry>,
    pub phases: Vec<SearchEntry<'a>>,
    pub resources: Vec<SearchEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct TagEntry {
    #[serde(flatten)]
    pub count: TagCount,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct SearchEntry<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub text: Vec<&'a str>,
    pub tags: &'a [String],
    pub url: String,
}

impl<'a> SearchEntry<'a> {
    fn phase(config: &Config, phase: &'a Phase) -> Self {
        Self {
            id: &phase.id,
            title: &phase.title,
            text: vec![phase.summary.as_str(), phase.problem.as_str(), phase.approach.as_str()],
            tags: &phase.tags,
            url: html::link(&config.site, &format!("phases/{}/", phase.id)),
        }
    }

    fn resource(resource: &'a Resource) -> Self {
        Self {
            id: &resource.id,
            title: &resource.title,
            text: vec![resource.description.as_str()],
            tags: &resource.tags,
            url: resource.url.clone(),
        }
    }
}

pub struct SiteRenderer<'a> {
    config: &'a Config,
    store: &'a ContentStore,
}

impl<'a> SiteRenderer<'a> {
    #[must_use]
    pub const fn new(config: &'a Config, store: &'a ContentStore) -> Self {
        Self { config, store }
    }

    /// Every output file as `(relative path, contents)`, in write order.
    pub fn render(&self) -> Result<Vec<(String, String)>> {
        let store = self.store;
        let mut controller = SearchController::new(store, self.config.search.index_options());
        let tags = controller.catalog().tags().to_vec();
        let views = Pages::new(&self.config.site, store, TagSlugs::new(&tags));

        let mut files = vec![
            ("index.html".to_string(), views.home()),
            ("phases/index.html".to_string(), views.phases()),
        ];
        for phase in store.phases() {
            files.push((format!("phases/{}/index.html", phase.id), views.phase_detail(phase)));
        }

        for kind in std::iter::once(None).chain(ResourceKind::ALL.map(Some)) {
            files.push((
                format!("{}index.html", pages::resource_listing_path(kind)),
                views.resources(&controller, kind),
            ));
        }

        for tag in &tags {
            controller.toggle_tag(tag);
            files.push((
                format!("{}index.html", views.slugs().path(tag)),
                views.tag_page(tag, &controller),
            ));
            controller.toggle_tag(tag);
        }

        files.push(("about/index.html".to_string(), views.about()));
        files.push(("contact/index.html".to_string(), views.contact()));
        files.push(("404.html".to_string(), views.not_found()));
        files.push(("search.json".to_string(), self.search_document(&controller, views.slugs())?));
        files.push(("assets/site.css".to_string(), STYLESHEET.to_string()));
        Ok(files)
    }

    fn search_document(&self, controller: &SearchController<'_>, slugs: &TagSlugs) -> Result<String> {
        let document = SearchDocument {
            tags: controller
                .catalog()
                .counts()
                .into_iter()
                .map(|count| TagEntry {
                    url: html::link(&self.config.site, &slugs.path(&count.tag)),
                    count,
                })
                .collect(),
            phases: self
                .store
                .phases()
                .iter()
                .map(|phase| SearchEntry::phase(self.config, phase))
                .collect(),
            resources: self.store.resources().iter().map(SearchEntry::resource).collect(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Render into `out_dir`, removing it first when `clean` is set.
    pub fn build(&self, out_dir: &Path, clean: bool) -> Result<BuildReport> {
        if clean && out_dir.exists() {
            if out_dir.join("Cargo.toml").exists() || out_dir.join(".git").exists() {
                return Err(SiteError::Config(format!(
                    "refusing to clean {}: it looks like a project root",
                    out_dir.display()
                )));
            }
            debug!(target: "render", dir = %out_dir.display(), "cleaning output directory");
            fs::remove_dir_all(out_dir)?;
        }

        let files = self.render()?;
        let mut written = Vec::with_capacity(files.len());
        for (relative, contents) in files {
            let path = out_dir.join(&relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, contents)?;
            debug!(target: "render", file = %relative, "wrote");
            written.push(relative);
        }

        let report = BuildReport {
            output_dir: out_dir.to_path_buf(),
            pages: written.iter().filter(|f| f.ends_with(".html")).count(),
            tags: written.iter().filter(|f| f.starts_with("tags/")).count(),
            files: written,
            built_at: Utc::now(),
        };
        info!(
            target: "render",
            dir = %out_dir.display(),
            pages = report.pages,
            "site built"
        );
        Ok(report)
    }
}
