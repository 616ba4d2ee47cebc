use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::content::{ContentStore, LinkPolicy};
use crate::error::Result;
use crate::search::SearchController;

pub struct AppContext {
    pub root: PathBuf,
    pub config: Config,
    pub store: ContentStore,
    /// Directory the store was read from; `None` for the embedded data.
    pub content_dir: Option<PathBuf>,
    pub robot_mode: bool,
    pub output_format: OutputFormat,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = Self::find_root()?;
        let config = Config::load(cli.config.as_deref(), &root)?;
        let content_dir = cli
            .content
            .clone()
            .or_else(|| config.content.dir.as_ref().map(PathBuf::from))
            .map(|dir| resolve(&root, dir));
        let store = load_store(content_dir.as_deref(), config.content.link_policy())?;

        Ok(Self {
            root,
            config,
            store,
            content_dir,
            robot_mode: cli.robot,
            output_format: cli.output_format(),
            verbosity: cli.verbose,
        })
    }

    /// Controller over the loaded store with the configured search options.
    #[must_use]
    pub fn controller(&self) -> SearchController<'_> {
        SearchController::new(&self.store, self.config.search.index_options())
    }

    /// Resolve a user-supplied path against the project root.
    #[must_use]
    pub fn resolve(&self, path: impl Into<PathBuf>) -> PathBuf {
        resolve(&self.root, path.into())
    }

    fn find_root() -> Result<PathBuf> {
        if let Ok(root) = std::env::var("ROBOLINE_ROOT") {
            return Ok(PathBuf::from(root));
        }
        Ok(std::env::current_dir()?)
    }
}

/// Read content from `dir`, or fall back to the embedded collections.
pub fn load_store(dir: Option<&Path>, policy: LinkPolicy) -> Result<ContentStore> {
    match dir {
        Some(dir) => {
            debug!(target: "content", dir = %dir.display(), "loading content directory");
            ContentStore::from_dir(dir, policy)
        }
        None => {
            debug!(target: "content", "loading embedded content");
            ContentStore::embedded(policy)
        }
    }
}

fn resolve(root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}
