//! roboline - static site and fuzzy search for the RoboLine curriculum.
//!
//! The library owns the content store, the fuzzy search engine and the
//! search/filter controller, and the static HTML renderer. The `roboline`
//! binary is a thin CLI over it.

pub mod app;
pub mod cli;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod render;
pub mod search;
pub mod test_utils;

pub use error::{RecordKind, Result, SiteError};
