//! Search/filter controller.
//!
//! Owns the free-text query and the selected tags, and recomputes the
//! visible result list after every change. The recomputation itself is the
//! pure [`recompute`] function.

use serde::Serialize;
use tracing::debug;

use crate::content::{ContentStore, Phase, Resource, ResourceKind};
use crate::error::RecordKind;

use super::catalog::TagCatalog;
use super::index::{FuzzyIndex, IndexOptions};

/// The record behind a result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "item", rename_all = "lowercase")]
pub enum SearchItem<'a> {
    Phase(&'a Phase),
    Resource(&'a Resource),
}

impl<'a> SearchItem<'a> {
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Phase(_) => RecordKind::Phase,
            Self::Resource(_) => RecordKind::Resource,
        }
    }

    #[must_use]
    pub fn id(&self) -> &'a str {
        match self {
            Self::Phase(p) => &p.id,
            Self::Resource(r) => &r.id,
        }
    }

    #[must_use]
    pub fn title(&self) -> &'a str {
        match self {
            Self::Phase(p) => &p.title,
            Self::Resource(r) => &r.title,
        }
    }

    #[must_use]
    pub fn tags(&self) -> &'a [String] {
        match self {
            Self::Phase(p) => &p.tags,
            Self::Resource(r) => &r.tags,
        }
    }

    /// Resource type; `None` for phases.
    #[must_use]
    pub const fn resource_kind(&self) -> Option<ResourceKind> {
        match self {
            Self::Phase(_) => None,
            Self::Resource(r) => Some(r.kind),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    #[serde(flatten)]
    pub item: SearchItem<'a>,
    /// Lower is a better match; 0 for the unranked listing.
    pub score: f64,
}

/// Record-kind and resource-type narrowing applied on top of the
/// controller's results. It never changes their order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultFilter {
    pub kind: Option<RecordKind>,
    /// Set only resources of this type pass, so phases are dropped.
    pub resource_type: Option<ResourceKind>,
}

impl ResultFilter {
    /// Resources only, optionally of one type.
    #[must_use]
    pub const fn resources(resource_type: Option<ResourceKind>) -> Self {
        Self {
            kind: Some(RecordKind::Resource),
            resource_type,
        }
    }

    #[must_use]
    pub fn accepts(&self, result: &SearchResult<'_>) -> bool {
        if self.kind.is_some_and(|kind| kind != result.item.kind()) {
            return false;
        }
        match self.resource_type {
            None => true,
            Some(wanted) => result.item.resource_kind() == Some(wanted),
        }
    }

    pub fn apply<'r, 'a>(
        &self,
        results: &'r [SearchResult<'a>],
    ) -> impl Iterator<Item = &'r SearchResult<'a>> {
        let filter = *self;
        results.iter().filter(move |result| filter.accepts(result))
    }
}

/// Query and tag selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub query: String,
    /// Insertion order is kept for display only.
    pub selected_tags: Vec<String>,
}

impl FilterState {
    #[must_use]
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    fn accepts(&self, tags: &[String]) -> bool {
        self.selected_tags.is_empty() || self.selected_tags.iter().any(|t| tags.contains(t))
    }
}

/// Derive the result list from `state` over both indexes.
#[must_use]
pub fn recompute<'a>(
    state: &FilterState,
    phases: &FuzzyIndex<'a, Phase>,
    resources: &FuzzyIndex<'a, Resource>,
) -> Vec<SearchResult<'a>> {
    let (phase_results, resource_results): (Vec<_>, Vec<_>) = if state.has_query() {
        (
            phases
                .query(&state.query)
                .into_iter()
                .map(|m| SearchResult {
                    item: SearchItem::Phase(m.item),
                    score: m.score,
                })
                .collect(),
            resources
                .query(&state.query)
                .into_iter()
                .map(|m| SearchResult {
                    item: SearchItem::Resource(m.item),
                    score: m.score,
                })
                .collect(),
        )
    } else {
        (
            phases
                .items()
                .iter()
                .map(|p| SearchResult {
                    item: SearchItem::Phase(p),
                    score: 0.0,
                })
                .collect(),
            resources
                .items()
                .iter()
                .map(|r| SearchResult {
                    item: SearchItem::Resource(r),
                    score: 0.0,
                })
                .collect(),
        )
    };

    let mut results: Vec<SearchResult<'a>> = phase_results
        .into_iter()
        .chain(resource_results)
        .filter(|result| state.accepts(result.item.tags()))
        .collect();

    // Stable: equal scores keep phase-before-resource and collection order.
    results.sort_by(|a, b| a.score.total_cmp(&b.score));
    results
}

/// Single owner of the query/tag state and the visible results.
pub struct SearchController<'a> {
    phases: FuzzyIndex<'a, Phase>,
    resources: FuzzyIndex<'a, Resource>,
    catalog: TagCatalog,
    state: FilterState,
    results: Vec<SearchResult<'a>>,
}

impl<'a> SearchController<'a> {
    #[must_use]
    pub fn new(store: &'a ContentStore, options: IndexOptions) -> Self {
        Self::from_parts(store.phases(), store.resources(), options)
    }

    #[must_use]
    pub fn from_parts(phases: &'a [Phase], resources: &'a [Resource], options: IndexOptions) -> Self {
        let phases = FuzzyIndex::build(phases, options);
        let resources = FuzzyIndex::build(resources, options);
        let catalog = TagCatalog::build(phases.items(), resources.items());
        let state = FilterState::default();
        let results = recompute(&state, &phases, &resources);
        Self {
            phases,
            resources,
            catalog,
            state,
            results,
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.refresh();
    }

    /// Select `tag` if unselected, otherwise deselect it.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.state.selected_tags.iter().position(|t| t == tag) {
            self.state.selected_tags.remove(pos);
        } else {
            self.state.selected_tags.push(tag.to_string());
        }
        self.refresh();
    }

    pub fn clear(&mut self) {
        self.state = FilterState::default();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.results = recompute(&self.state, &self.phases, &self.resources);
        debug!(
            target: "search",
            query = %self.state.query,
            tags = ?self.state.selected_tags,
            results = self.results.len(),
            "results recomputed"
        );
    }

    #[must_use]
    pub fn results(&self) -> &[SearchResult<'a>] {
        &self.results
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.state.query
    }

    #[must_use]
    pub fn selected_tags(&self) -> &[String] {
        &self.state.selected_tags
    }

    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub const fn catalog(&self) -> &TagCatalog {
        &self.catalog
    }
}
