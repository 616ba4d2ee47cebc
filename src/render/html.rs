//! Page chrome and HTML helpers shared by every page.

use std::collections::{HashMap, HashSet};

use crate::config::SiteConfig;
use crate::content::ContentStore;

/// Top-level navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Phases,
    Resources,
    About,
    Contact,
}

impl NavItem {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Phases,
        Self::Resources,
        Self::About,
        Self::Contact,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Phases => "Phases",
            Self::Resources => "Resources",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    /// Site-relative path, without the base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Phases => "phases/",
            Self::Resources => "resources/",
            Self::About => "about/",
            Self::Contact => "contact/",
        }
    }
}

/// Line-at-a-time appends for page builders.
pub trait PushLine {
    fn push_line(&mut self, line: impl AsRef<str>);
}

impl PushLine for String {
    fn push_line(&mut self, line: impl AsRef<str>) {
        self.push_str(line.as_ref());
        self.push('\n');
    }
}

/// Output path segment for every catalog tag.
///
/// Slugs are unique: when two tags reduce to the same slug the later one
/// gets `-2`, `-3`, and so on. A tag with no usable characters becomes `tag`.
#[derive(Debug, Clone, Default)]
pub struct TagSlugs {
    by_tag: HashMap<String, String>,
}

impl TagSlugs {
    /// Assign slugs in `tags` order.
    #[must_use]
    pub fn new(tags: &[String]) -> Self {
        let mut taken = HashSet::new();
        let mut by_tag = HashMap::with_capacity(tags.len());
        for tag in tags {
            if by_tag.contains_key(tag) {
                continue;
            }
            let base = match slug(tag) {
                base if base.is_empty() => "tag".to_string(),
                base => base,
            };
            let mut candidate = base.clone();
            let mut suffix = 2;
            while !taken.insert(candidate.clone()) {
                candidate = format!("{base}-{suffix}");
                suffix += 1;
            }
            by_tag.insert(tag.clone(), candidate);
        }
        Self { by_tag }
    }

    /// Slug for `tag`, falling back to a plain [`slug`] for tags outside
    /// the catalog.
    #[must_use]
    pub fn get(&self, tag: &str) -> String {
        self.by_tag.get(tag).cloned().unwrap_or_else(|| slug(tag))
    }

    /// Site-relative directory of the tag's page.
    #[must_use]
    pub fn path(&self, tag: &str) -> String {
        format!("tags/{}/", self.get(tag))
    }
}

#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Join the configured base URL and a site-relative path.
#[must_use]
pub fn link(site: &SiteConfig, path: &str) -> String {
    let base = site.base_url.trim_end_matches('/');
    format!("{base}/{}", path.trim_start_matches('/'))
}

#[must_use]
pub fn tag_chip(site: &SiteConfig, slugs: &TagSlugs, tag: &str) -> String {
    format!(
        r#"<a class="tag" href="{}">{}</a>"#,
        escape(&link(site, &slugs.path(tag))),
        escape(tag)
    )
}

/// Lowercase path segment with anything outside `[a-z0-9-]` collapsed to `-`.
#[must_use]
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() || ch == '-' {
            out.push(ch);
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}

/// Wrap `body` in the shared document, header navigation, and footer.
#[must_use]
pub fn layout(
    site: &SiteConfig,
    store: &ContentStore,
    title: &str,
    active: Option<NavItem>,
    body: &str,
) -> String {
    let page_title = if title.is_empty() {
        site.title.clone()
    } else {
        format!("{title} | {}", site.title)
    };

    let mut out = format!(
        concat!(
            "<!DOCTYPE html>\n<html lang=\"en\" class=\"dark\">\n<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "<title>{title}</title>\n",
            "<link rel=\"stylesheet\" href=\"{css}\">\n",
            "</head>\n<body>\n"
        ),
        title = escape(&page_title),
        css = escape(&link(site, "assets/site.css")),
    );
    out.push_str(&header(site, active));
    out.push_str("<main>\n");
    out.push_str(body);
    out.push_str("</main>\n");
    out.push_str(&footer(site, store));
    out.push_str("</body>\n</html>\n");
    out
}

fn header(site: &SiteConfig, active: Option<NavItem>) -> String {
    let mut out = String::from("<header class=\"site-header\">\n<nav>\n");
    out.push_line(format!(
        r#"<a class="brand" href="{}">{}</a>"#,
        escape(&link(site, "")),
        escape(&site.title)
    ));
    out.push_str("<ul class=\"nav-links\">\n");
    for item in NavItem::ALL {
        let class = if Some(item) == active { " class=\"active\"" } else { "" };
        let current = if Some(item) == active {
            " aria-current=\"page\""
        } else {
            ""
        };
        out.push_line(format!(
            r#"<li><a{class}{current} href="{}">{}</a></li>"#,
            escape(&link(site, item.path())),
            item.label()
        ));
    }
    out.push_str("</ul>\n</nav>\n</header>\n");
    out
}

fn footer(site: &SiteConfig, store: &ContentStore) -> String {
    let mut out = String::from("<footer class=\"site-footer\">\n<section class=\"brand\">\n");
    out.push_line(format!("<h2>{}</h2>", escape(&site.title)));
    out.push_line(format!("<p>{}</p>", escape(&site.tagline)));
    out.push_str("<ul class=\"social\">\n");
    for social in &site.social {
        out.push_line(format!(
            r#"<li><a href="{}" target="_blank" rel="noopener noreferrer" aria-label="{label}">{label}</a></li>"#,
            escape(&social.url),
            label = escape(&social.label)
        ));
    }
    out.push_str("</ul>\n</section>\n");

    let mut learning: Vec<(String, String, bool)> = store
        .phases()
        .iter()
        .enumerate()
        .map(|(i, phase)| {
            (
                format!("Phase {}: {}", i + 1, phase.title),
                link(site, &format!("phases/{}/", phase.id)),
                false,
            )
        })
        .collect();
    learning.push((
        "All Resources".to_string(),
        link(site, NavItem::Resources.path()),
        false,
    ));

    let github = site.github_url.trim_end_matches('/');
    let project = vec![
        ("About the Team".to_string(), link(site, NavItem::About.path()), false),
        ("Documentation".to_string(), link(site, NavItem::Phases.path()), false),
        ("GitHub Repository".to_string(), github.to_string(), true),
        ("Contributing Guide".to_string(), format!("{github}/contributing"), true),
    ];
    let support = vec![
        ("Get Help".to_string(), link(site, NavItem::Contact.path()), false),
        ("Report Issues".to_string(), format!("{github}/issues"), true),
        ("Feature Requests".to_string(), format!("{github}/discussions"), true),
    ];

    for (heading, links) in [("Learning", learning), ("Project", project), ("Support", support)] {
        out.push_line(format!("<section>\n<h3>{heading}</h3>\n<ul>"));
        for (name, href, external) in links {
            let target = if external {
                " target=\"_blank\" rel=\"noopener noreferrer\""
            } else {
                ""
            };
            out.push_line(format!(
                r#"<li><a href="{}"{target}>{}</a></li>"#,
                escape(&href),
                escape(&name)
            ));
        }
        out.push_str("</ul>\n</section>\n");
    }
    out.push_str("</footer>\n");
    out
}
