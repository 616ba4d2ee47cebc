//! Content store: the phase and resource collections.
//!
//! Both collections are parsed once at startup, either from the data files
//! embedded in the binary or from a content directory, and are never
//! mutated afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Result, SiteError};

pub mod types;

pub use types::{CodeSnippet, Difficulty, Phase, Resource, ResourceKind, estimated_time};

const EMBEDDED_PHASES: &str = include_str!("../../data/phases.toml");
const EMBEDDED_RESOURCES: &str = include_str!("../../data/resources.toml");

pub const PHASES_FILE: &str = "phases.toml";
pub const RESOURCES_FILE: &str = "resources.toml";

#[derive(Deserialize)]
struct PhaseFile {
    #[serde(default)]
    phases: Vec<Phase>,
}

#[derive(Deserialize)]
struct ResourceFile {
    #[serde(default)]
    resources: Vec<Resource>,
}

/// How `next_phase` references are checked when the store is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkPolicy {
    /// Dangling references are logged and render no link.
    #[default]
    Permissive,
    /// Dangling references fail construction.
    Strict,
}

/// A `next_phase` reference that names no phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingLink {
    pub phase_id: String,
    pub target: String,
}

impl std::fmt::Display for DanglingLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "phase {} links to missing next phase {}",
            self.phase_id, self.target
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    phases: Vec<Phase>,
    resources: Vec<Resource>,
}

impl ContentStore {
    /// Build a store, rejecting duplicate ids and applying `policy` to
    /// `next_phase` references.
    pub fn new(phases: Vec<Phase>, resources: Vec<Resource>, policy: LinkPolicy) -> Result<Self> {
        ensure_unique("phase", phases.iter().map(|p| p.id.as_str()))?;
        ensure_unique("resource", resources.iter().map(|r| r.id.as_str()))?;

        let store = Self { phases, resources };
        let dangling = store.dangling_links();
        for link in &dangling {
            warn!(target: "content", phase = %link.phase_id, target_id = %link.target, "dangling next_phase reference");
        }
        if policy == LinkPolicy::Strict {
            if let Some(first) = dangling.first() {
                return Err(SiteError::InvalidContent(first.to_string()));
            }
        }

        debug!(
            target: "content",
            phases = store.phases.len(),
            resources = store.resources.len(),
            "content store ready"
        );
        Ok(store)
    }

    /// Parse the data files compiled into the binary.
    pub fn embedded(policy: LinkPolicy) -> Result<Self> {
        Self::from_toml(EMBEDDED_PHASES, EMBEDDED_RESOURCES, policy)
    }

    pub fn from_toml(phases_src: &str, resources_src: &str, policy: LinkPolicy) -> Result<Self> {
        let phases: PhaseFile = toml::from_str(phases_src)
            .map_err(|err| SiteError::ContentParse(format!("{PHASES_FILE}: {err}")))?;
        let resources: ResourceFile = toml::from_str(resources_src)
            .map_err(|err| SiteError::ContentParse(format!("{RESOURCES_FILE}: {err}")))?;
        Self::new(phases.phases, resources.resources, policy)
    }

    /// Load `phases.toml` and `resources.toml` from a directory. A missing
    /// file yields an empty collection.
    pub fn from_dir(dir: &Path, policy: LinkPolicy) -> Result<Self> {
        if !dir.is_dir() {
            return Err(SiteError::MissingConfig(format!(
                "content directory not found: {}",
                dir.display()
            )));
        }
        let phases_src = read_optional(&dir.join(PHASES_FILE))?;
        let resources_src = read_optional(&dir.join(RESOURCES_FILE))?;
        debug!(target: "content", dir = %dir.display(), "loading content directory");
        Self::from_toml(&phases_src, &resources_src, policy)
    }

    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    #[must_use]
    pub fn phase(&self, id: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn phase_position(&self, id: &str) -> Option<usize> {
        self.phases.iter().position(|p| p.id == id)
    }

    /// The phase `next_phase` points at, if the reference resolves.
    #[must_use]
    pub fn next_phase(&self, phase: &Phase) -> Option<&Phase> {
        phase.next_phase.as_deref().and_then(|id| self.phase(id))
    }

    /// The phase listed immediately before `phase`.
    #[must_use]
    pub fn previous_phase(&self, phase: &Phase) -> Option<&Phase> {
        match self.phase_position(&phase.id) {
            Some(pos) if pos > 0 => self.phases.get(pos - 1),
            _ => None,
        }
    }

    #[must_use]
    pub fn dangling_links(&self) -> Vec<DanglingLink> {
        self.phases
            .iter()
            .filter_map(|phase| {
                let target = phase.next_phase.as_deref()?;
                if self.phase(target).is_some() {
                    None
                } else {
                    Some(DanglingLink {
                        phase_id: phase.id.clone(),
                        target: target.to_string(),
                    })
                }
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty() && self.resources.is_empty()
    }
}

fn ensure_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SiteError::InvalidContent(format!("duplicate {kind} id: {id}")));
        }
    }
    Ok(())
}

fn read_optional(path: &Path) -> Result<String> {
    if !path.exists() {
        return Ok(String::new());
    }
    std::fs::read_to_string(path).map_err(|err| {
        SiteError::ContentParse(format!("read {}: {err}", path.display()))
    })
}
