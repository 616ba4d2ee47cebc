//! Tag catalog: every tag used by either collection, once, in first-seen order.

use std::collections::HashMap;

use serde::Serialize;

use crate::content::{Phase, Resource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub phases: usize,
    pub resources: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCatalog {
    tags: Vec<String>,
    counts: HashMap<String, (usize, usize)>,
}

impl TagCatalog {
    /// Phase tags first, then resource tags.
    #[must_use]
    pub fn build(phases: &[Phase], resources: &[Resource]) -> Self {
        let mut catalog = Self::default();
        for phase in phases {
            for tag in &phase.tags {
                catalog.record(tag).0 += 1;
            }
        }
        for resource in resources {
            for tag in &resource.tags {
                catalog.record(tag).1 += 1;
            }
        }
        catalog
    }

    fn record(&mut self, tag: &str) -> &mut (usize, usize) {
        if !self.counts.contains_key(tag) {
            self.tags.push(tag.to_string());
        }
        self.counts.entry(tag.to_string()).or_default()
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.counts.contains_key(tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Usage counts in catalog order.
    #[must_use]
    pub fn counts(&self) -> Vec<TagCount> {
        self.tags
            .iter()
            .map(|tag| {
                let (phases, resources) = self.counts.get(tag).copied().unwrap_or_default();
                TagCount {
                    tag: tag.clone(),
                    phases,
                    resources,
                }
            })
            .collect()
    }
}
