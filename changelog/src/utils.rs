use once_cell::sync::Lazy;
use regex::Regex;

pub static HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("Failed to compile heading regex"));

pub static LIST_ITEM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*+]\s+(.+)$").expect("Failed to compile list item regex"));

/// `1.0.0 (2024-01-01)` with an optional pre-release/build suffix
pub static SEMVER_PAREN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+\.\d+\.\d+(?:[-+][\w.-]*)?)\s*\(([^)]+)\)$")
        .expect("Failed to compile semver-paren regex")
});

/// `[1.0.0] - 2024-01-01` or `1.0.0 - rest`, hyphen or en dash
pub static BRACKET_DASH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[?([^\]]+?)\]?\s*[-–]\s*(.+)$").expect("Failed to compile bracket-dash regex")
});

/// `1.0.0 rest-of-title`
pub static SEMVER_REST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+\.\d+\.\d+\S*)\s+(.+)$").expect("Failed to compile semver-rest regex")
});

pub static ISO_DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("Failed to compile date regex"));

/// Leading `[badge]` tags that are redundant once a visual badge is rendered
pub static BADGE_PREFIX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\[(?:new|feature|feat|improvement|improve|bugfix|fix|bug|breaking|security|deps?|dependency|dependencies)\]\s*",
    )
    .expect("Failed to compile badge prefix regex")
});

/// Everything that is neither a word character nor whitespace
pub static SECTION_PUNCTUATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("Failed to compile punctuation regex"));
