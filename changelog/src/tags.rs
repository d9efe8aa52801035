//! Category badges for releases.
//!
//! Two sources feed the badge row: a fixed table keyed by recognized
//! section names, and a keyword heuristic over the serialized release. The
//! heuristic is approximate, and a release can carry overlapping
//! categories (both Breaking and Feature).

use crate::types::{Release, Sections};

/// A short visual label with its CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub class: &'static str,
    pub label: &'static str,
}

impl Tag {
    #[must_use]
    pub fn html(&self) -> String {
        format!(r#"<span class="tag {}">{}</span>"#, self.class, self.label)
    }
}

const DEFAULT_TAG: Tag = Tag {
    class: "tag-feature",
    label: "Update",
};

fn tag_for_section(section: &str) -> Option<Tag> {
    Some(match section {
        "features" => Tag {
            class: "tag-feature",
            label: "New",
        },
        "fixes" => Tag {
            class: "tag-fix",
            label: "Fix",
        },
        "breaking" => Tag {
            class: "tag-breaking",
            label: "Breaking",
        },
        "security" => Tag {
            class: "tag-security",
            label: "Security",
        },
        "improvements" => DEFAULT_TAG,
        _ => return None,
    })
}

/// One badge per non-empty recognized section, defaulting to "Update"
#[must_use]
pub fn generate_tags(sections: &Sections) -> Vec<Tag> {
    let tags: Vec<Tag> = sections
        .iter()
        .filter(|(_, items)| !items.is_empty())
        .filter_map(|(section, _)| tag_for_section(section))
        .collect();

    if tags.is_empty() {
        vec![DEFAULT_TAG]
    } else {
        tags
    }
}

/// Heuristic category cues detected for a release
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFlags {
    pub breaking: bool,
    pub feature: bool,
    pub fix: bool,
    pub security: bool,
    pub dependencies: bool,
}

impl CategoryFlags {
    #[must_use]
    pub fn tags(&self) -> Vec<Tag> {
        let mut tags = Vec::new();
        if self.breaking {
            tags.push(Tag {
                class: "tag-breaking",
                label: "Breaking",
            });
        }
        if self.feature {
            tags.push(Tag {
                class: "tag-feature",
                label: "Feature",
            });
        }
        if self.fix {
            tags.push(Tag {
                class: "tag-fix",
                label: "Fix",
            });
        }
        if self.security {
            tags.push(Tag {
                class: "tag-security",
                label: "Security",
            });
        }
        if self.dependencies {
            tags.push(Tag {
                class: "tag-deps",
                label: "Dependencies",
            });
        }
        tags
    }
}

/// Scan a release for contextual keyword cues.
///
/// Pure function over the JSON-serialized release text (lowercased) plus a
/// few structural checks. Best effort only.
#[must_use]
pub fn classify_release(release: &Release) -> CategoryFlags {
    let haystack = serde_json::to_string(release)
        .unwrap_or_default()
        .to_lowercase();

    CategoryFlags {
        breaking: haystack.contains("breaking")
            || haystack.contains("major")
            || release.has_section("removed"),
        feature: release.has_section("added") || release.has_section("changed"),
        fix: release.has_section("fixed") || release.has_section("fixes"),
        security: release.has_section("security"),
        dependencies: haystack.contains("dependency")
            || haystack.contains("dependencies")
            || haystack.contains("npm")
            || haystack.contains("package"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangeItem;

    fn sections_with(entries: &[(&str, &[&str])]) -> Sections {
        let mut map = Sections::default();
        for (name, items) in entries {
            map.insert(
                (*name).to_string(),
                items
                    .iter()
                    .map(|text| ChangeItem {
                        text: (*text).to_string(),
                        raw: format!("- {text}"),
                    })
                    .collect(),
            );
        }
        map
    }

    fn release_with(entries: &[(&str, &[&str])]) -> Release {
        Release {
            version: "1.0.0".to_string(),
            date: "2024-01-01".to_string(),
            title: "1.0.0".to_string(),
            sections: sections_with(entries),
        }
    }

    #[test]
    fn one_badge_per_recognized_section() {
        let sections = sections_with(&[("features", &["a"]), ("fixes", &["b"])]);
        let labels: Vec<&str> = generate_tags(&sections).iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["New", "Fix"]);
    }

    #[test]
    fn empty_sections_produce_no_badge() {
        let sections = sections_with(&[("features", &[]), ("fixes", &["b"])]);
        let labels: Vec<&str> = generate_tags(&sections).iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["Fix"]);
    }

    #[test]
    fn default_update_badge_when_nothing_recognized() {
        let sections = sections_with(&[("docs", &["a"])]);
        let tags = generate_tags(&sections);
        assert_eq!(tags, vec![DEFAULT_TAG]);
    }

    #[test]
    fn removed_section_implies_breaking() {
        let flags = classify_release(&release_with(&[("removed", &["Old endpoint"])]));
        assert!(flags.breaking);
    }

    #[test]
    fn breaking_keyword_in_any_item_implies_breaking() {
        let flags = classify_release(&release_with(&[("fixes", &["Breaking: renamed flag"])]));
        assert!(flags.breaking);
        assert!(flags.fix);
    }

    #[test]
    fn dependency_keywords_are_detected() {
        let flags = classify_release(&release_with(&[("changed", &["Bump npm dependencies"])]));
        assert!(flags.dependencies);
        assert!(flags.feature);
    }

    #[test]
    fn overlapping_categories_are_allowed() {
        let flags = classify_release(&release_with(&[
            ("added", &["Major new mode"]),
            ("fixed", &["Crash on start"]),
        ]));
        assert!(flags.breaking); // "major" keyword trips the heuristic
        assert!(flags.feature);
        assert!(flags.fix);
    }
}
