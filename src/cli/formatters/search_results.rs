//! Search results formatter
//!
//! Renders controller results as a numbered list (Human), tab-separated rows
//! (Plain), or a JSON envelope.

use console::style;
use serde::Serialize;
use tracing::debug;

use crate::cli::output::{Formattable, OutputFormat, escape_tsv, robot_ok};
use crate::error::RecordKind;
use crate::search::{SearchItem, SearchResult};

/// One printed result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResultRow {
    pub kind: &'static str,
    pub id: String,
    pub title: String,
    pub score: f64,
    pub tags: Vec<String>,
    /// Resource kind wire name; absent for phases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<&'static str>,
    pub description: String,
}

impl From<&SearchResult<'_>> for SearchResultRow {
    fn from(result: &SearchResult<'_>) -> Self {
        let (resource_type, description) = match result.item {
            SearchItem::Phase(phase) => (None, phase.summary.clone()),
            SearchItem::Resource(resource) => {
                (Some(resource.kind.as_str()), resource.description.clone())
            }
        };
        Self {
            kind: result.item.kind().as_str(),
            id: result.item.id().to_string(),
            title: result.item.title().to_string(),
            score: result.score,
            tags: result.item.tags().to_vec(),
            resource_type,
            description,
        }
    }
}

/// Search results collection for formatted display
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub tags: Vec<String>,
    pub count: usize,
    pub results: Vec<SearchResultRow>,
    /// Reported in the envelope, not the payload.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

impl SearchResults {
    pub fn new(query: impl Into<String>, tags: &[String]) -> Self {
        Self {
            query: query.into(),
            tags: tags.to_vec(),
            count: 0,
            results: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn warn(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn push(&mut self, row: SearchResultRow) {
        self.results.push(row);
        self.count = self.results.len();
    }

    fn format_human(&self) -> String {
        debug!(target: "search", results = self.results.len(), "rendering results");
        let mut out: String = self
            .warnings
            .iter()
            .map(|warning| format!("{} {warning}\n", style("warning:").yellow()))
            .collect();
        if self.results.is_empty() {
            out.push_str(&self.format_empty());
            return out;
        }

        out.push_str(&self.header());
        out.push_str("\n\n");
        for (i, row) in self.results.iter().enumerate() {
            let label = match row.resource_type {
                Some(kind) => format!("{}/{kind}", RecordKind::Resource),
                None => RecordKind::Phase.to_string(),
            };
            out.push_str(&format!(
                "{}. {} [{:.3}] {}\n",
                i + 1,
                style(&row.title).bold(),
                row.score,
                style(label).dim(),
            ));
            out.push_str(&format!("   {}\n", row.id));
            if !row.tags.is_empty() {
                out.push_str(&format!("   tags: {}\n", row.tags.join(", ")));
            }
            out.push('\n');
        }
        out
    }

    fn format_empty(&self) -> String {
        let mut out = String::from("! No results");
        if !self.query.trim().is_empty() {
            out.push_str(&format!(" for '{}'", self.query));
        }
        out.push_str("\n\nTry:\n  - Using different keywords\n  - Removing tag filters (--tag)\n");
        out
    }

    fn header(&self) -> String {
        let mut header = format!("{} results", self.results.len());
        if !self.query.trim().is_empty() {
            header.push_str(&format!(" for '{}'", self.query));
        }
        if !self.tags.is_empty() {
            header.push_str(&format!(" tagged {}", self.tags.join(" | ")));
        }
        header
    }

    /// `SCORE<TAB>KIND<TAB>ID<TAB>TITLE`, no header.
    fn format_plain(&self) -> String {
        self.results
            .iter()
            .map(|row| {
                format!(
                    "{:.4}\t{}\t{}\t{}",
                    row.score,
                    row.kind,
                    row.id,
                    escape_tsv(&row.title)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Formattable for SearchResults {
    fn format(&self, fmt: OutputFormat) -> String {
        match fmt {
            OutputFormat::Human => self.format_human(),
            OutputFormat::Json => {
                let response = robot_ok(self).with_warnings(self.warnings.clone());
                serde_json::to_string_pretty(&response).unwrap_or_default()
            }
            OutputFormat::Plain => self.format_plain(),
        }
    }
}
