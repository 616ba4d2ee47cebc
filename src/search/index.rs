//! Weighted multi-field fuzzy index over one collection.

use crate::content::{Phase, Resource};

use super::bitap::{BitapSearcher, MatchOptions};

/// A field value exposed to the index.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
}

/// Records the index can search.
pub trait Searchable {
    /// Searched field names, each with equal weight.
    const KEYS: &'static [&'static str];

    fn field(&self, key: &str) -> Option<FieldValue<'_>>;
}

impl Searchable for Phase {
    const KEYS: &'static [&'static str] = &["title", "summary", "problem", "approach", "tags"];

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "title" => Some(FieldValue::Text(&self.title)),
            "summary" => Some(FieldValue::Text(&self.summary)),
            "problem" => Some(FieldValue::Text(&self.problem)),
            "approach" => Some(FieldValue::Text(&self.approach)),
            "tags" => Some(FieldValue::List(&self.tags)),
            _ => None,
        }
    }
}

impl Searchable for Resource {
    const KEYS: &'static [&'static str] = &["title", "description", "tags"];

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "title" => Some(FieldValue::Text(&self.title)),
            "description" => Some(FieldValue::Text(&self.description)),
            "tags" => Some(FieldValue::List(&self.tags)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexOptions {
    pub matching: MatchOptions,
    /// Score every field as if it were a single token long.
    pub ignore_field_norm: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            matching: MatchOptions::default(),
            ignore_field_norm: false,
        }
    }
}

#[derive(Debug, Clone)]
struct IndexedValue<'a> {
    text: &'a str,
    norm: f64,
}

#[derive(Debug, Clone)]
struct IndexedRecord<'a> {
    /// One entry per key, each holding that key's non-blank values.
    fields: Vec<Vec<IndexedValue<'a>>>,
}

/// A scored hit from [`FuzzyIndex::query`].
#[derive(Debug, Clone, Copy)]
pub struct Match<'a, T> {
    pub item: &'a T,
    /// Position in the indexed collection.
    pub position: usize,
    pub score: f64,
}

/// Fuzzy index over a borrowed collection, built once.
#[derive(Debug, Clone)]
pub struct FuzzyIndex<'a, T> {
    items: &'a [T],
    records: Vec<IndexedRecord<'a>>,
    key_weight: f64,
    options: IndexOptions,
}

impl<'a, T: Searchable> FuzzyIndex<'a, T> {
    #[must_use]
    pub fn build(items: &'a [T], options: IndexOptions) -> Self {
        let records = items
            .iter()
            .map(|item| IndexedRecord {
                fields: T::KEYS
                    .iter()
                    .map(|key| index_field(item.field(key)))
                    .collect(),
            })
            .collect();

        #[allow(clippy::cast_precision_loss)]
        let key_weight = 1.0 / T::KEYS.len().max(1) as f64;

        Self {
            items,
            records,
            key_weight,
            options,
        }
    }

    #[must_use]
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records matching `text`, best first; ties keep collection order.
    #[must_use]
    pub fn query(&self, text: &str) -> Vec<Match<'a, T>> {
        let searcher = BitapSearcher::new(text, self.options.matching);
        let mut matches: Vec<Match<'a, T>> = self
            .records
            .iter()
            .enumerate()
            .filter_map(|(position, record)| {
                self.score_record(&searcher, record).map(|score| Match {
                    item: &self.items[position],
                    position,
                    score,
                })
            })
            .collect();

        matches.sort_by(|a, b| a.score.total_cmp(&b.score).then(a.position.cmp(&b.position)));
        matches
    }

    fn score_record(&self, searcher: &BitapSearcher, record: &IndexedRecord<'_>) -> Option<f64> {
        let mut matched = false;
        let mut total = 1.0;
        for values in &record.fields {
            for value in values {
                let result = searcher.search_in(value.text);
                if !result.is_match {
                    continue;
                }
                matched = true;
                let norm = if self.options.ignore_field_norm {
                    1.0
                } else {
                    value.norm
                };
                let base = if result.score == 0.0 {
                    f64::EPSILON
                } else {
                    result.score
                };
                total *= base.powf(self.key_weight * norm);
            }
        }
        matched.then_some(total)
    }
}

fn index_field(value: Option<FieldValue<'_>>) -> Vec<IndexedValue<'_>> {
    match value {
        Some(FieldValue::Text(text)) => indexed(text).into_iter().collect(),
        Some(FieldValue::List(values)) => values.iter().filter_map(|v| indexed(v)).collect(),
        None => Vec::new(),
    }
}

fn indexed(text: &str) -> Option<IndexedValue<'_>> {
    if text.trim().is_empty() {
        return None;
    }
    Some(IndexedValue {
        text,
        norm: field_norm(text),
    })
}

/// `1 / sqrt(tokens)` rounded to three decimals; tokens are runs of
/// non-space characters.
#[must_use]
pub fn field_norm(text: &str) -> f64 {
    let tokens = text.split(' ').filter(|t| !t.is_empty()).count().max(1);
    #[allow(clippy::cast_precision_loss)]
    let norm = 1.0 / (tokens as f64).sqrt();
    (norm * 1000.0).round() / 1000.0
}
