//! Release parser: groups the token stream into structured releases.
//!
//! The two-level heading convention (`##` = release, `###` = section)
//! mirrors "Keep a Changelog", so a single forward scan with two pieces of
//! cursor state is enough; headings are unambiguous boundaries.

use chrono::Local;

use crate::cache::ParseCache;
use crate::error::Result;
use crate::tokenizer::{tokenize, Token, TokenKind};
use crate::types::{ChangeItem, Release, Sections};
use crate::utils::{
    BRACKET_DASH_PATTERN, ISO_DATE_PATTERN, SECTION_PUNCTUATION_PATTERN, SEMVER_PAREN_PATTERN,
    SEMVER_REST_PATTERN,
};
use crate::version::compare_versions;

#[derive(Debug, Default)]
struct ParserState {
    current_release: Option<Release>,
    current_section: Option<String>,
}

#[derive(Debug, Default)]
pub struct ReleaseParser {
    cache: ParseCache,
}

impl ReleaseParser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_cache(cache: ParseCache) -> Self {
        Self { cache }
    }

    /// Parse raw markdown into releases, tokenizing internally.
    ///
    /// Identical content to the previous call is served from the parse
    /// cache without re-scanning.
    ///
    /// # Errors
    /// Returns `ChangelogError::Parse` on structural failure; a document
    /// with no release headings parses to an empty list, never an error.
    pub fn parse(&mut self, markdown: &str) -> Result<Vec<Release>> {
        if let Some(cached) = self.cache.get(markdown) {
            return Ok(cached.to_vec());
        }

        let releases = self.parse_tokens(&tokenize(markdown))?;
        self.cache.store(markdown, &releases);
        Ok(releases)
    }

    /// Parse an already tokenized document.
    ///
    /// # Errors
    /// Returns `ChangelogError::Parse` on structural failure.
    pub fn parse_tokens(&self, tokens: &[Token]) -> Result<Vec<Release>> {
        let mut releases = Vec::new();
        let mut state = ParserState::default();

        for token in tokens {
            match token.kind {
                TokenKind::Heading if token.level == Some(2) => {
                    if let Some(release) = state.current_release.take() {
                        releases.push(release);
                    }
                    state.current_release = Some(release_from_heading(&token.text));
                    state.current_section = None;
                }
                TokenKind::Heading if token.level == Some(3) => {
                    if let Some(release) = state.current_release.as_mut() {
                        let section = normalize_section_name(&token.text);
                        // Section exists even when no items follow
                        release.sections.entry(section.clone()).or_default();
                        state.current_section = Some(section);
                    }
                }
                TokenKind::ListItem => {
                    if let (Some(release), Some(section)) =
                        (state.current_release.as_mut(), state.current_section.as_ref())
                    {
                        if let Some(items) = release.sections.get_mut(section) {
                            items.push(ChangeItem {
                                text: token.text.clone(),
                                raw: token.raw.clone(),
                            });
                        }
                    }
                }
                // Other headings and prose between sections carry no
                // structure for the release list.
                _ => {}
            }
        }

        if let Some(release) = state.current_release.take() {
            releases.push(release);
        }

        releases.sort_by(|a, b| compare_versions(&b.version, &a.version));
        Ok(releases)
    }

    /// Drop the cached parse result
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

/// Parse a `##` heading into version, date and title.
///
/// Pattern attempts in order: `"<semver> (<date>)"`, `"[<version>] - <rest>"`
/// (hyphen or en dash, brackets optional), `"<semver> <rest>"`, then a
/// fallback taking the whole text (surrounding brackets stripped) as the
/// version. An embedded `YYYY-MM-DD` in the non-version part wins as the
/// date; otherwise the date defaults to today.
fn release_from_heading(text: &str) -> Release {
    let (version, rest) = if let Some(captures) = SEMVER_PAREN_PATTERN.captures(text) {
        (captures[1].to_string(), Some(captures[2].to_string()))
    } else if let Some(captures) = BRACKET_DASH_PATTERN.captures(text) {
        (captures[1].to_string(), Some(captures[2].to_string()))
    } else if let Some(captures) = SEMVER_REST_PATTERN.captures(text) {
        (captures[1].to_string(), Some(captures[2].to_string()))
    } else {
        (strip_brackets(text).to_string(), None)
    };

    let date = rest
        .as_deref()
        .and_then(|rest| ISO_DATE_PATTERN.find(rest))
        .map_or_else(today, |m| m.as_str().to_string());

    let version = version.trim().to_string();
    let version = if version.is_empty() {
        "unknown".to_string()
    } else {
        version
    };

    Release {
        version,
        date,
        title: text.to_string(),
        sections: Sections::default(),
    }
}

fn strip_brackets(text: &str) -> &str {
    let text = text.trim();
    text.strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap_or(text)
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Normalize a `###` heading into the section vocabulary.
///
/// Lowercase, strip punctuation, then map through the synonym table;
/// unrecognized names pass through as their cleaned slug.
#[must_use]
pub fn normalize_section_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let cleaned = SECTION_PUNCTUATION_PATTERN.replace_all(&lowered, "");
    let cleaned = cleaned.trim();

    canonical_section(cleaned).map_or_else(|| cleaned.to_string(), str::to_string)
}

fn canonical_section(cleaned: &str) -> Option<&'static str> {
    Some(match cleaned {
        "features" | "feature" | "new features" | "new feature" | "feat" => "features",
        "fixes" | "fix" | "bug fixes" | "bug fix" | "bugfixes" | "bugfix" => "fixes",
        "breaking changes" | "breaking change" | "breaking" => "breaking",
        "security" | "security fix" | "security fixes" => "security",
        "improvements" | "improvement" | "performance" | "perf" => "improvements",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(markdown: &str) -> Vec<Release> {
        ReleaseParser::new().parse(markdown).unwrap()
    }

    #[test]
    fn one_release_per_level_two_heading() {
        let releases = parse("## 2.0.0 (2024-02-01)\n### Features\n- [new] Thing\n## 1.0.0 (2024-01-01)\n### Fixes\n- Bug fix");
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].version, "2.0.0");
        assert_eq!(releases[0].date, "2024-02-01");
        assert_eq!(releases[0].section("features")[0].text, "[new] Thing");
        assert_eq!(releases[1].version, "1.0.0");
        assert_eq!(releases[1].section("fixes")[0].text, "Bug fix");
    }

    #[test]
    fn releases_sort_descending_by_version() {
        let releases = parse("## 1.0.0 (2024-01-01)\n## 10.0.0 (2024-03-01)\n## 2.0.0 (2024-02-01)");
        let versions: Vec<&str> = releases.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(versions, vec!["10.0.0", "2.0.0", "1.0.0"]);
    }

    #[test]
    fn unreleased_heading_defaults_to_today() {
        let releases = parse("## [Unreleased]\n### Features\n- Pending thing");
        assert_eq!(releases[0].version, "Unreleased");
        assert_eq!(releases[0].date, today());
        assert_eq!(releases[0].title, "[Unreleased]");
    }

    #[test]
    fn bracket_dash_format() {
        let releases = parse("## [1.2.3] - 2023-11-05");
        assert_eq!(releases[0].version, "1.2.3");
        assert_eq!(releases[0].date, "2023-11-05");
    }

    #[test]
    fn en_dash_separator() {
        let releases = parse("## 1.2.3 – 2023-11-05");
        assert_eq!(releases[0].version, "1.2.3");
        assert_eq!(releases[0].date, "2023-11-05");
    }

    #[test]
    fn semver_followed_by_title_text() {
        let releases = parse("## 1.4.0 Codename Falcon");
        assert_eq!(releases[0].version, "1.4.0");
        assert_eq!(releases[0].date, today());
        assert_eq!(releases[0].title, "1.4.0 Codename Falcon");
    }

    #[test]
    fn empty_bracket_heading_falls_back_to_unknown() {
        let releases = parse("## []");
        assert_eq!(releases[0].version, "unknown");
    }

    #[test]
    fn section_synonyms_normalize() {
        let releases = parse(
            "## 1.0.0 (2024-01-01)\n### Bug Fixes\n- a\n### Perf\n- b\n### Breaking Changes!\n- c",
        );
        assert!(releases[0].has_section("fixes"));
        assert!(releases[0].has_section("improvements"));
        assert!(releases[0].has_section("breaking"));
    }

    #[test]
    fn unrecognized_section_passes_through_as_slug() {
        let releases = parse("## 1.0.0 (2024-01-01)\n### Deprecated!!\n- old thing");
        assert!(releases[0].has_section("deprecated"));
    }

    #[test]
    fn empty_section_is_created() {
        let releases = parse("## 1.0.0 (2024-01-01)\n### Features\n## 0.9.0 (2023-12-01)");
        assert!(releases[0].sections.contains_key("features"));
        assert!(releases[0].section("features").is_empty());
    }

    #[test]
    fn items_outside_a_section_are_ignored() {
        let releases = parse("- stray item\n## 1.0.0 (2024-01-01)\n- still no section");
        assert_eq!(releases.len(), 1);
        assert!(releases[0].sections.is_empty());
    }

    #[test]
    fn item_order_reflects_document_order() {
        let releases = parse("## 1.0.0 (2024-01-01)\n### Fixes\n- first\n- second\n- third");
        let texts: Vec<&str> = releases[0]
            .section("fixes")
            .iter()
            .map(|i| i.text.as_str())
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn document_without_releases_parses_to_empty_list() {
        assert!(parse("# Changelog\n\nJust prose.").is_empty());
    }

    #[test]
    fn cached_parse_returns_same_result() {
        let mut parser = ReleaseParser::new();
        let first = parser.parse("## 1.0.0 (2024-01-01)").unwrap();
        let second = parser.parse("## 1.0.0 (2024-01-01)").unwrap();
        assert_eq!(first, second);
    }
}
