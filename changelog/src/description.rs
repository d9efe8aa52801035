//! Human-readable release summaries derived from sections.

use crate::types::Release;
use crate::utils::BADGE_PREFIX_PATTERN;

/// Sections that contribute a summary line, most important first
const SECTION_PRIORITIES: [&str; 5] = ["breaking", "features", "fixes", "improvements", "security"];

const FALLBACK_DESCRIPTION: &str = "Various improvements and bug fixes";

fn section_label(section: &str) -> &'static str {
    match section {
        "breaking" => "Breaking",
        "features" => "New",
        "fixes" => "Fix",
        "improvements" => "Improved",
        "security" => "Security",
        _ => "Update",
    }
}

/// One summary line per non-empty priority section, or a generic fallback.
#[must_use]
pub fn format_release_descriptions(release: &Release) -> Vec<String> {
    let descriptions: Vec<String> = SECTION_PRIORITIES
        .iter()
        .filter(|section| release.has_section(section))
        .map(|section| format_section_description(section, release))
        .collect();

    if descriptions.is_empty() {
        vec![FALLBACK_DESCRIPTION.to_string()]
    } else {
        descriptions
    }
}

fn format_section_description(section: &str, release: &Release) -> String {
    let items = release.section(section);
    let first = items.first().map_or("improvements", |item| item.text.as_str());
    // Summaries drop the [badge] prefix the same way rendered items do
    let first = BADGE_PREFIX_PATTERN.replace(first, "");

    if items.len() == 1 {
        return format!("{}: {first}", section_label(section));
    }

    // Breaking changes read better without a numeric count
    let count_label = if section == "breaking" {
        "Breaking changes".to_string()
    } else {
        format!("{} {section}", items.len())
    };
    format!("{count_label} including {first}")
}

/// Bullet-joined HTML rendering of summary lines
#[must_use]
pub fn format_as_html(descriptions: &[String]) -> String {
    descriptions
        .iter()
        .map(|desc| format!("• {desc}"))
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Bullet-joined plain text rendering of summary lines
#[must_use]
pub fn format_as_plain_text(descriptions: &[String]) -> String {
    descriptions
        .iter()
        .map(|desc| format!("• {desc}"))
        .collect::<Vec<_>>()
        .join("\n")
}
