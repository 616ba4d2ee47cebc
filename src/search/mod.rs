//! Search engine for phases and resources.
//!
//! Bitap fuzzy matching per field, a weighted per-collection index, the tag
//! catalog, and the search/filter controller that combines them.

pub mod bitap;
pub mod catalog;
pub mod controller;
pub mod index;

pub use bitap::{BitapMatch, BitapSearcher, MatchOptions};
pub use catalog::{TagCatalog, TagCount};
pub use controller::{
    FilterState, ResultFilter, SearchController, SearchItem, SearchResult, recompute,
};
pub use index::{FieldValue, FuzzyIndex, IndexOptions, Match, Searchable};
