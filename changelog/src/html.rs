//! HTML rendering of parsed releases.
//!
//! Rendering is a pure function of its inputs: the release list, a template
//! containing the two release markers, and the render options. Every piece
//! of interpolated text is HTML-escaped; text embedded in inline event
//! handler attributes is additionally escaped for the JS string context.

use chrono::NaiveDate;

use crate::description;
use crate::error::{ChangelogError, Result};
use crate::install::{manager_label, short_label, InstallCommandSpec, ResolvedInstall};
use crate::tags::{classify_release, generate_tags, Tag};
use crate::template::{MarkerTemplate, TemplateEngine, TemplateVars};
use crate::types::Release;
use crate::utils::BADGE_PREFIX_PATTERN;

/// Fixed display order for section content blocks; unrecognized sections
/// follow in document order.
const SECTION_DISPLAY_ORDER: &[(&str, &str)] = &[
    ("breaking", "Breaking Changes"),
    ("added", "Added"),
    ("features", "New Features"),
    ("changed", "Changed"),
    ("improvements", "Improvements"),
    ("deprecated", "Deprecated"),
    ("removed", "Removed"),
    ("fixed", "Fixed"),
    ("fixes", "Bug Fixes"),
    ("security", "Security"),
];

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub title: String,
    pub author: String,
    pub description: String,
    /// `None` disables the version-badge tooltip entirely
    pub install_command: Option<InstallCommandSpec>,
}

pub struct HtmlRenderer {
    engine: Box<dyn TemplateEngine>,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Box::new(MarkerTemplate),
        }
    }

    #[must_use]
    pub fn with_engine(engine: Box<dyn TemplateEngine>) -> Self {
        Self { engine }
    }

    /// Project releases into the template.
    ///
    /// # Errors
    /// Returns `ChangelogError::InvalidInput` for an empty template and
    /// `ChangelogError::Template` when the template is missing a release
    /// marker.
    pub fn render(
        &self,
        releases: &[Release],
        template: &str,
        options: &RenderOptions,
    ) -> Result<String> {
        if template.trim().is_empty() {
            return Err(ChangelogError::InvalidInput(
                "template must not be empty".to_string(),
            ));
        }

        let body = if releases.is_empty() {
            r#"      <li class="release release-empty">No releases found</li>"#.to_string()
        } else {
            releases
                .iter()
                .enumerate()
                .map(|(index, release)| render_release(release, index == 0, options))
                .collect::<Vec<_>>()
                .join("\n\n")
        };

        let vars = TemplateVars {
            title: escape_html(&options.title),
            author: escape_html(&options.author),
            description: escape_html(&options.description),
        };
        self.engine.substitute(template, &vars, &body)
    }
}

fn render_release(release: &Release, is_latest: bool, options: &RenderOptions) -> String {
    let tooltip = options
        .install_command
        .as_ref()
        .map(|spec| render_tooltip(&spec.resolve(&release.version)))
        .unwrap_or_default();

    let latest_tag = if is_latest {
        "\n          <span class=\"tag tag-stable\">Latest</span>"
    } else {
        ""
    };

    let badges = render_badges(release);
    let summary_lines: Vec<String> = description::format_release_descriptions(release)
        .iter()
        .map(|line| escape_html(line))
        .collect();
    let summary = description::format_as_html(&summary_lines);

    format!(
        r#"      <li class="release">
        <div class="release-header">
          <span class="version-badge tag tag-version">v{version}{tooltip}</span>{latest_tag}
          {badges}
          <time datetime="{date}">{display_date}</time>
        </div>
        <p class="release-summary">{summary}</p>
{sections}      </li>"#,
        version = escape_html(&release.version),
        date = escape_html(&release.date),
        display_date = escape_html(&format_date(&release.date)),
        sections = render_sections(release),
    )
}

/// Section-table badges plus heuristic category badges; identical labels
/// collapse, distinct labels from overlapping categories all render.
fn render_badges(release: &Release) -> String {
    let mut tags: Vec<Tag> = generate_tags(&release.sections);
    for tag in classify_release(release).tags() {
        if !tags.iter().any(|existing| existing.label == tag.label) {
            tags.push(tag);
        }
    }

    tags.iter().map(Tag::html).collect::<Vec<_>>().join("\n          ")
}

fn render_sections(release: &Release) -> String {
    let mut blocks = Vec::new();
    let mut remaining: Vec<&str> = release.sections.keys().map(String::as_str).collect();

    for (section, label) in SECTION_DISPLAY_ORDER {
        if release.has_section(section) {
            blocks.push(render_section_block(release, section, label));
        }
        remaining.retain(|name| name != section);
    }

    // Passthrough sections keep document order and get a capitalized slug
    for section in remaining {
        if release.has_section(section) {
            blocks.push(render_section_block(release, section, &capitalize(section)));
        }
    }

    blocks.concat()
}

fn render_section_block(release: &Release, section: &str, label: &str) -> String {
    let items = release
        .section(section)
        .iter()
        .map(|item| {
            let display = BADGE_PREFIX_PATTERN.replace(&item.text, "");
            format!(
                "            <li class=\"change-item\">{}</li>",
                escape_html(&display)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"        <div class="release-section">
          <h3 class="section-title">{}</h3>
          <ul class="section-items">
{items}
          </ul>
        </div>
"#,
        escape_html(label),
    )
}

fn render_tooltip(resolved: &ResolvedInstall) -> String {
    match resolved {
        ResolvedInstall::Single(command) => render_single_tooltip(command),
        ResolvedInstall::SameManager(commands) if commands.is_empty() => String::new(),
        ResolvedInstall::SameManager(commands) => {
            let labels: Vec<&str> = commands.iter().map(|cmd| short_label(cmd)).collect();
            render_tabbed_tooltip(commands.iter().map(String::as_str), labels.into_iter())
        }
        ResolvedInstall::MixedManagers(commands) => {
            let labels: Vec<&str> = commands.iter().map(|cmd| manager_label(cmd)).collect();
            render_tabbed_tooltip(commands.iter().map(String::as_str), labels.into_iter())
        }
        ResolvedInstall::Named(commands) if commands.is_empty() => String::new(),
        ResolvedInstall::Named(commands) => render_tabbed_tooltip(
            commands.values().map(String::as_str),
            commands.keys().map(String::as_str),
        ),
    }
}

fn render_single_tooltip(command: &str) -> String {
    format!(
        r#"
            <div class="tooltip">
              <pre><code>{}</code></pre>
              <span class="copy-btn" onclick="copyToClipboard('{}', this)">copy</span>
            </div>"#,
        escape_html(command),
        escape_js_attr(command),
    )
}

fn render_tabbed_tooltip<'a>(
    commands: impl Iterator<Item = &'a str>,
    labels: impl Iterator<Item = &'a str>,
) -> String {
    let commands: Vec<&str> = commands.collect();
    let tabs = commands
        .iter()
        .zip(labels)
        .enumerate()
        .map(|(index, (command, label))| {
            let active = if index == 0 { " active" } else { "" };
            format!(
                r#"                <div class="command-tab{active}" onclick="switchTab(this, '{}')">{}</div>"#,
                escape_js_attr(command),
                escape_html(label),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
            <div class="tooltip multi-command">
              <div class="command-tabs">
{tabs}
              </div>
              <div class="command-content">
                <span class="active-command">{}</span>
                <span class="copy-btn" onclick="copyActiveCommand(this)">copy</span>
              </div>
            </div>"#,
        escape_html(commands[0]),
    )
}

/// Locale-style date formatting, falling back to the raw string so a
/// malformed date never blocks the rest of the render.
fn format_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|parsed| parsed.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Escape for a single-quoted JS string inside an HTML attribute: JS string
/// escapes first, then HTML entity escapes on top.
pub fn escape_js_attr(text: &str) -> String {
    let js = text
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\r', "")
        .replace('\n', "\\n");
    escape_html(&js)
}
