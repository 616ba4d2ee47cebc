//! Page bodies. Each method returns a complete HTML document.

use crate::config::SiteConfig;
use crate::content::{ContentStore, Difficulty, Phase, Resource, ResourceKind, estimated_time};
use crate::search::{ResultFilter, SearchController, SearchItem};

use super::html::{NavItem, PushLine, TagSlugs, escape, layout, link, slug, tag_chip};
use super::markdown::render_markdown;

const FEATURES: [(&str, &str); 4] = [
    (
        "Hands-on Projects",
        "Build a working line-following robot, one phase at a time.",
    ),
    (
        "Real Code",
        "Every phase ships the firmware snippets used on the robot.",
    ),
    (
        "Video Walkthroughs",
        "See each iteration running on the track before you build it.",
    ),
    (
        "Open Source",
        "All material is public; contributions are welcome.",
    ),
];

const CONTRIBUTION_WAYS: [&str; 4] = [
    "Submit bug reports and feature requests",
    "Contribute code improvements and new phases",
    "Share your project implementations",
    "Help improve documentation",
];

/// Everything a page needs besides the controller.
pub struct Pages<'a> {
    site: &'a SiteConfig,
    store: &'a ContentStore,
    slugs: TagSlugs,
}

impl<'a> Pages<'a> {
    #[must_use]
    pub fn new(site: &'a SiteConfig, store: &'a ContentStore, slugs: TagSlugs) -> Self {
        Self { site, store, slugs }
    }

    #[must_use]
    pub const fn slugs(&self) -> &TagSlugs {
        &self.slugs
    }

    fn href(&self, path: &str) -> String {
        escape(&link(self.site, path))
    }

    fn page(&self, title: &str, active: Option<NavItem>, body: &str) -> String {
        layout(self.site, self.store, title, active, body)
    }

    fn tags_html(&self, tags: &[String]) -> String {
        let mut out = String::from("<div class=\"tags\">");
        for tag in tags {
            out.push_str(&tag_chip(self.site, &self.slugs, tag));
        }
        out.push_line("</div>");
        out
    }

    fn phase_card(&self, index: usize, phase: &Phase) -> String {
        let mut out = String::new();
        out.push_line(format!(
            "<article class=\"card phase-card\" id=\"{}\">",
            escape(&phase.id)
        ));
        out.push_line(format!(
            "<p class=\"eyebrow\">PHASE {} &middot; {} &middot; {}</p>",
            index + 1,
            estimated_time(index),
            Difficulty::for_position(index).label()
        ));
        out.push_line(format!("<h2>{}</h2>", escape(&phase.title)));
        out.push_line(format!("<p>{}</p>", escape(&phase.summary)));
        out.push_str(&self.tags_html(&phase.tags));
        out.push_line("<ul class=\"stats\">");
        out.push_line(format!("<li>{} code modules</li>", phase.code_snippets.len()));
        out.push_line(format!("<li>{} schematics</li>", phase.images.len()));
        if phase.video_url.is_some() {
            out.push_line("<li>Simulation videos</li>");
        }
        out.push_line("</ul>");
        out.push_line(format!(
            r#"<a class="button" href="{}">Explore phase</a>"#,
            self.href(&format!("phases/{}/", phase.id))
        ));
        out.push_line("</article>");
        out
    }

    fn resource_card(&self, resource: &Resource) -> String {
        let glyph = resource.icon.as_deref().unwrap_or_else(|| resource.kind.glyph());
        let mut out = String::new();
        out.push_line(format!(
            "<article class=\"card resource-card\" data-type=\"{}\" id=\"{}\">",
            resource.kind.as_str(),
            escape(&resource.id)
        ));
        out.push_line(format!(
            "<span class=\"badge {}\">{} {}</span>",
            resource.kind.color_class(),
            escape(glyph),
            resource.kind.label()
        ));
        out.push_line(format!("<h2>{}</h2>", escape(&resource.title)));
        out.push_line(format!("<p>{}</p>", escape(&resource.description)));
        out.push_str(&self.tags_html(&resource.tags));
        out.push_line(format!(
            r#"<a class="button" href="{}" target="_blank" rel="noopener noreferrer">Visit resource</a>"#,
            escape(&resource.url)
        ));
        out.push_line("</article>");
        out
    }

    #[must_use]
    pub fn home(&self) -> String {
        let mut body = String::from("<section class=\"hero\">\n");
        body.push_line(format!("<h1>{}</h1>", escape(&self.site.title)));
        body.push_line(format!("<p>{}</p>", escape(&self.site.tagline)));
        if let Some(first) = self.store.phases().first() {
            body.push_line(format!(
                r#"<a class="button" href="{}">Start learning</a>"#,
                self.href(&format!("phases/{}/", first.id))
            ));
        }
        body.push_line("</section>\n<section class=\"features\">");
        for (title, text) in FEATURES {
            body.push_line(format!(
                "<div class=\"feature\"><h3>{title}</h3><p>{text}</p></div>"
            ));
        }
        body.push_line("</section>\n<section class=\"phase-overview\">\n<h2>Learning Path</h2>");
        for (index, phase) in self.store.phases().iter().enumerate() {
            body.push_str(&self.phase_card(index, phase));
        }
        body.push_line("</section>");
        self.page("", Some(NavItem::Home), &body)
    }

    #[must_use]
    pub fn phases(&self) -> String {
        let mut body = String::from(concat!(
            "<section class=\"intro\">\n<h1>Build Your Robotics Expertise</h1>\n",
            "<p>Progress through the learning phases to master robotics from fundamentals ",
            "to advanced applications.</p>\n</section>\n<section class=\"phase-grid\">\n"
        ));
        for (index, phase) in self.store.phases().iter().enumerate() {
            body.push_str(&self.phase_card(index, phase));
        }
        body.push_line("</section>");
        if let Some(first) = self.store.phases().first() {
            body.push_line(format!(
                concat!(
                    "<section class=\"cta\">\n<h2>Ready to begin?</h2>\n",
                    "<p>Start with Phase 1 and progress through each stage. Each phase builds on the previous one.</p>\n",
                    "<a class=\"button\" href=\"{}\">Begin Phase 1</a>\n</section>"
                ),
                self.href(&format!("phases/{}/", first.id))
            ));
        }
        self.page("Phases", Some(NavItem::Phases), &body)
    }

    #[must_use]
    pub fn phase_detail(&self, phase: &Phase) -> String {
        let index = self.store.phase_position(&phase.id).unwrap_or_default();
        let difficulty = Difficulty::for_position(index);
        let mut body = String::new();

        body.push_line(format!(
            r#"<a class="back" href="{}">&larr; Back to All Phases</a>"#,
            self.href(NavItem::Phases.path())
        ));
        body.push_line("<header class=\"phase-header\">");
        body.push_line(format!(
            "<p class=\"eyebrow\">Phase {} <span class=\"level level-{}\">{}</span> {}</p>",
            index + 1,
            slug(difficulty.label()),
            difficulty.label(),
            estimated_time(index)
        ));
        body.push_line(format!("<h1>{}</h1>", escape(&phase.title)));
        body.push_line(format!("<p class=\"summary\">{}</p>", escape(&phase.summary)));
        body.push_line(format!(
            "<p class=\"meta\">Published <time datetime=\"{date}\">{date}</time></p>",
            date = phase.created_at.format("%Y-%m-%d")
        ));
        body.push_str(&self.tags_html(&phase.tags));
        body.push_line("</header>");

        body.push_line("<section id=\"overview\">\n<h2>The Problem</h2>");
        body.push_str(&render_markdown(&phase.problem));
        body.push_line("<h2>Our Approach</h2>");
        body.push_str(&render_markdown(&phase.approach));
        for (heading, items) in [("Hardware", &phase.hardware), ("Software", &phase.software)] {
            if items.is_empty() {
                continue;
            }
            body.push_line(format!("<h3>{heading}</h3>\n<ul>"));
            for item in items {
                body.push_line(format!("<li>{}</li>", escape(item)));
            }
            body.push_line("</ul>");
        }
        body.push_line("</section>");

        body.push_line("<section id=\"code\">\n<h2>Code</h2>");
        if phase.code_snippets.is_empty() {
            body.push_line("<p class=\"empty\">No code for this phase yet.</p>");
        }
        for snippet in &phase.code_snippets {
            body.push_line(format!(
                "<figure class=\"code-block\" id=\"{}\">",
                escape(&snippet.id)
            ));
            body.push_str(&format!(
                "<figcaption><h4>{}</h4><span class=\"language\">{}</span>\n",
                escape(&snippet.title),
                escape(&snippet.language)
            ));
            if let Some(description) = &snippet.description {
                body.push_str(&format!("<p>{}</p>", escape(description)));
            }
            body.push_line("</figcaption>");
            body.push_line(format!(
                "<pre><code class=\"language-{}\">{}</code></pre>\n</figure>",
                escape(&snippet.language),
                escape(&snippet.code)
            ));
        }
        body.push_line("</section>");

        body.push_line("<section id=\"video\">\n<h2>Video</h2>");
        match &phase.video_url {
            Some(url) => body.push_line(format!(
                concat!(
                    "<div class=\"video\"><iframe src=\"{}\" title=\"{} Tutorial\" frameborder=\"0\" ",
                    "allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture\" ",
                    "allowfullscreen loading=\"lazy\"></iframe></div>"
                ),
                escape(url),
                escape(&phase.title)
            )),
            None => body.push_line("<p class=\"empty\">No video available for this phase.</p>"),
        }
        body.push_line("</section>");

        body.push_line("<section id=\"images\">\n<h2>Images</h2>");
        if phase.images.is_empty() {
            body.push_line("<p class=\"empty\">No images available for this phase.</p>");
        } else {
            body.push_line("<div class=\"gallery\">");
            for (i, image) in phase.images.iter().enumerate() {
                body.push_line(format!(
                    r#"<a href="{src}" target="_blank" rel="noopener noreferrer"><img src="{src}" alt="{} {}" loading="lazy"></a>"#,
                    escape(&phase.title),
                    i + 1,
                    src = escape(image)
                ));
            }
            body.push_line("</div>");
        }
        body.push_line("</section>");

        body.push_line("<nav class=\"phase-nav\">");
        if let Some(prev) = self.store.previous_phase(phase) {
            body.push_line(format!(
                r#"<a class="prev" href="{}">&larr; Previous Phase: {}</a>"#,
                self.href(&format!("phases/{}/", prev.id)),
                escape(&prev.title)
            ));
        }
        if let Some(next) = self.store.next_phase(phase) {
            body.push_line(format!(
                r#"<a class="next" href="{}">Next Phase: {} &rarr;</a>"#,
                self.href(&format!("phases/{}/", next.id)),
                escape(&next.title)
            ));
        }
        body.push_line("</nav>");

        self.page(&phase.title, Some(NavItem::Phases), &body)
    }

    /// Resource listing, narrowed to one type when `kind` is set.
    ///
    /// The type chips link to the per-type pages; the chip for the page being
    /// rendered is marked active.
    #[must_use]
    pub fn resources(&self, controller: &SearchController<'_>, kind: Option<ResourceKind>) -> String {
        let mut body = String::from(concat!(
            "<section class=\"intro\">\n<h1>Resources</h1>\n",
            "<p>Curated collection of tutorials, documentation, and tools to help you build ",
            "and improve your line-following robot.</p>\n</section>\n"
        ));

        body.push_line("<nav class=\"type-filter\" aria-label=\"Resource type\">");
        let chips = std::iter::once((None, "All".to_string()))
            .chain(ResourceKind::ALL.map(|k| (Some(k), k.label().to_string())));
        for (chip_kind, label) in chips {
            let (class, current) = if chip_kind == kind {
                (" active", " aria-current=\"page\"")
            } else {
                ("", "")
            };
            body.push_line(format!(
                r#"<a class="chip{class}"{current} href="{}">{label}</a>"#,
                self.href(&resource_listing_path(chip_kind))
            ));
        }
        body.push_line("</nav>");

        let resource_tags: Vec<String> = controller
            .catalog()
            .counts()
            .into_iter()
            .filter(|count| count.resources > 0)
            .map(|count| count.tag)
            .collect();
        if !resource_tags.is_empty() {
            body.push_line("<div class=\"tag-filter\">\n<h3>Filter by tags</h3>");
            body.push_str(&self.tags_html(&resource_tags));
            body.push_line("</div>");
        }

        let cards: Vec<String> = ResultFilter::resources(kind)
            .apply(controller.results())
            .filter_map(|result| match result.item {
                SearchItem::Resource(resource) => Some(self.resource_card(resource)),
                SearchItem::Phase(_) => None,
            })
            .collect();
        body.push_line(format!(
            "<p class=\"count\">Showing {} resource{}</p>",
            cards.len(),
            if cards.len() == 1 { "" } else { "s" }
        ));
        body.push_line("<section class=\"resource-grid\">");
        if cards.is_empty() {
            body.push_line("<p class=\"empty\">No resources found.</p>");
        }
        for card in cards {
            body.push_str(&card);
        }
        body.push_line("</section>");

        let title = kind.map_or_else(|| "Resources".to_string(), |k| format!("{} Resources", k.label()));
        self.page(&title, Some(NavItem::Resources), &body)
    }

    /// Listing of everything carrying `tag`, in controller order.
    #[must_use]
    pub fn tag_page(&self, tag: &str, controller: &SearchController<'_>) -> String {
        let mut body = String::new();
        body.push_line(format!(
            "<section class=\"intro\">\n<h1>Tagged &ldquo;{}&rdquo;</h1>\n<p>{} matching items</p>\n</section>",
            escape(tag),
            controller.results().len()
        ));
        body.push_line("<section class=\"tag-results\">");
        for result in controller.results() {
            match result.item {
                SearchItem::Phase(phase) => {
                    let index = self.store.phase_position(&phase.id).unwrap_or_default();
                    body.push_str(&self.phase_card(index, phase));
                }
                SearchItem::Resource(resource) => body.push_str(&self.resource_card(resource)),
            }
        }
        body.push_line("</section>");
        body.push_line(format!(
            r#"<a class="back" href="{}">&larr; All resources</a>"#,
            self.href(NavItem::Resources.path())
        ));
        self.page(&format!("Tag: {tag}"), None, &body)
    }

    #[must_use]
    pub fn about(&self) -> String {
        let title = escape(&self.site.title);
        let mut body = String::new();
        body.push_line(format!(
            concat!(
                "<section class=\"intro\">\n<h1>About {title}</h1>\n",
                "<p>{title} is an open robotics curriculum built around a single project: ",
                "a line-following robot that grows more capable with every phase.</p>\n</section>"
            ),
            title = title
        ));
        body.push_line("<section class=\"mission\">\n<h2>Our Mission</h2>");
        body.push_line(
            "<p>Make robotics approachable by documenting real iterations: the problem, the approach, \
             the hardware, and the code that made it work.</p>\n</section>",
        );
        body.push_line("<section class=\"journey\">\n<h2>The Journey</h2>\n<ol>");
        for phase in self.store.phases() {
            body.push_line(format!(
                r#"<li><a href="{}">{}</a> <time datetime="{date}">{date}</time></li>"#,
                self.href(&format!("phases/{}/", phase.id)),
                escape(&phase.title),
                date = phase.created_at.format("%Y-%m-%d")
            ));
        }
        body.push_line("</ol>\n</section>");
        self.page("About", Some(NavItem::About), &body)
    }

    #[must_use]
    pub fn contact(&self) -> String {
        let site = self.site;
        let github_display = site
            .github_url
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        let info = [
            ("Email", site.contact_email.as_str(), "Send us an email anytime"),
            ("GitHub", github_display, "Contribute to our open source project"),
            ("Location", "Open Source Project", "Available worldwide"),
            ("Response Time", "24-48 hours", "We try to respond quickly"),
        ];

        let mut body = String::from(concat!(
            "<section class=\"intro\">\n<h1>Get In Touch</h1>\n",
            "<p>Have questions about the project? Want to contribute? Need help with your implementation? ",
            "We'd love to hear from you!</p>\n</section>\n<section class=\"contact-info\">\n<h2>Contact Information</h2>\n"
        ));
        for (title, content, description) in info {
            body.push_line(format!(
                "<div class=\"info-card\"><h3>{title}</h3><p class=\"content\">{}</p><p>{description}</p></div>",
                escape(content)
            ));
        }
        body.push_line("<h2>Ways to Contribute</h2>\n<ul>");
        for way in CONTRIBUTION_WAYS {
            body.push_line(format!("<li>{way}</li>"));
        }
        body.push_line("</ul>\n</section>");

        body.push_line(format!(
            concat!(
                "<section class=\"contact-form\">\n<h2>Send us a Message</h2>\n",
                "<form method=\"post\" action=\"mailto:{}\">\n",
                "<label for=\"name\">Name</label><input type=\"text\" id=\"name\" name=\"name\" required placeholder=\"Your name\">\n",
                "<label for=\"email\">Email</label><input type=\"email\" id=\"email\" name=\"email\" required placeholder=\"your@email.com\">\n",
                "<label for=\"subject\">Subject</label><input type=\"text\" id=\"subject\" name=\"subject\" required placeholder=\"What's this about?\">\n",
                "<label for=\"message\">Message</label><textarea id=\"message\" name=\"message\" rows=\"6\" required placeholder=\"Tell us more...\"></textarea>\n",
                "<button type=\"submit\">Send Message</button>\n</form>\n</section>"
            ),
            escape(&site.contact_email)
        ));
        self.page("Contact", Some(NavItem::Contact), &body)
    }

    #[must_use]
    pub fn not_found(&self) -> String {
        let body = format!(
            concat!(
                "<section class=\"not-found\">\n<h1>Page not found</h1>\n",
                "<p>The page you were looking for does not exist.</p>\n",
                "<a class=\"button\" href=\"{}\">Back to Phases</a>\n</section>\n"
            ),
            self.href(NavItem::Phases.path())
        );
        self.page("Not found", None, &body)
    }
}

/// Site-relative directory of the resource listing for `kind`.
#[must_use]
pub fn resource_listing_path(kind: Option<ResourceKind>) -> String {
    match kind {
        None => NavItem::Resources.path().to_string(),
        Some(kind) => format!("{}{}/", NavItem::Resources.path(), kind.as_str()),
    }
}
