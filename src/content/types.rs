use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One ordered unit of the curriculum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub problem: String,
    pub approach: String,
    #[serde(default)]
    pub hardware: Vec<String>,
    #[serde(default)]
    pub software: Vec<String>,
    #[serde(default)]
    pub code_snippets: Vec<CodeSnippet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_phase: Option<String>,
    pub created_at: NaiveDate,
}

impl Phase {
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub id: String,
    pub title: String,
    pub language: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An external reference link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Resource {
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    #[serde(rename = "github", alias = "repository")]
    #[value(name = "github", alias = "repository")]
    Repository,
    #[serde(rename = "youtube", alias = "video")]
    #[value(name = "youtube", alias = "video")]
    Video,
    Article,
    Documentation,
}

impl ResourceKind {
    pub const ALL: [Self; 4] = [
        Self::Repository,
        Self::Video,
        Self::Article,
        Self::Documentation,
    ];

    /// Wire name, matching the content files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Repository => "github",
            Self::Video => "youtube",
            Self::Article => "article",
            Self::Documentation => "documentation",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Repository => "GitHub",
            Self::Video => "YouTube",
            Self::Article => "Article",
            Self::Documentation => "Documentation",
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Repository => "⌥",
            Self::Video => "▶",
            Self::Article => "✎",
            Self::Documentation => "📖",
        }
    }

    /// CSS class carrying the kind's badge color.
    #[must_use]
    pub const fn color_class(self) -> &'static str {
        match self {
            Self::Repository => "badge-gray",
            Self::Video => "badge-red",
            Self::Article => "badge-blue",
            Self::Documentation => "badge-green",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty shown for a phase, derived from its position in the curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Fundamental,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub const fn for_position(index: usize) -> Self {
        match index {
            1 => Self::Intermediate,
            2 => Self::Advanced,
            _ => Self::Fundamental,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fundamental => "Fundamental",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

#[must_use]
pub const fn estimated_time(index: usize) -> &'static str {
    match index {
        1 => "3-4 hours",
        2 => "4-5 hours",
        _ => "2-3 hours",
    }
}
