use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use crate::content::{Phase, Resource, ResourceKind};

/// Minimal phase whose text fields stay clear of typical test queries.
#[must_use]
pub fn phase(id: &str, tags: &[&str]) -> Phase {
    Phase {
        id: id.to_string(),
        title: format!("Item {id}"),
        summary: "Placeholder summary".to_string(),
        problem: "Placeholder problem".to_string(),
        approach: "Placeholder approach".to_string(),
        hardware: Vec::new(),
        software: Vec::new(),
        code_snippets: Vec::new(),
        video_url: None,
        images: Vec::new(),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        next_phase: None,
        created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
    }
}

/// Minimal article resource whose text fields stay clear of typical test queries.
#[must_use]
pub fn resource(id: &str, tags: &[&str]) -> Resource {
    Resource {
        id: id.to_string(),
        title: format!("Item {id}"),
        description: "Placeholder entry".to_string(),
        url: format!("https://example.com/{id}"),
        kind: ResourceKind::Article,
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        icon: None,
    }
}

/// Isolated directory holding content files, a config, and build output.
pub struct ContentFixture {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for ContentFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        println!("[FIXTURE] Created temp directory: {root:?}");
        Self { temp_dir, root }
    }

    /// Write a file relative to the fixture root.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {:?} ({} bytes)",
            full_path,
            content.len()
        );
        full_path
    }

    /// Write `content/phases.toml` and `content/resources.toml`.
    pub fn create_content(&self, phases_toml: &str, resources_toml: &str) -> PathBuf {
        self.create_file("content/phases.toml", phases_toml);
        self.create_file("content/resources.toml", resources_toml);
        self.root.join("content")
    }
}
