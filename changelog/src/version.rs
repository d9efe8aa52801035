//! Permissive three-component version comparison.
//!
//! Releases are sorted with a forgiving comparator: strip a leading `v`,
//! split on `.`, compare up to three numeric components. Missing and
//! non-numeric components count as 0, so purely textual versions compare
//! as equal to each other and sort below any numeric version.

use std::cmp::Ordering;

/// Compare two version strings numerically, major.minor.patch.
#[must_use]
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    numeric_parts(a).cmp(&numeric_parts(b))
}

fn numeric_parts(version: &str) -> [u64; 3] {
    let normalized = version.trim().strip_prefix('v').unwrap_or(version.trim());

    let mut parts = [0u64; 3];
    for (slot, segment) in parts.iter_mut().zip(normalized.split('.')) {
        // Trailing pre-release/build tags ("1.2.3-beta") fail the parse and
        // count as 0, same as a missing component.
        *slot = segment.parse().unwrap_or(0);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_major_minor_patch() {
        assert_eq!(compare_versions("2.0.0", "1.9.9"), Ordering::Greater);
        assert_eq!(compare_versions("1.2.3", "1.2.4"), Ordering::Less);
        assert_eq!(compare_versions("1.2.3", "1.2.3"), Ordering::Equal);
    }

    #[test]
    fn strips_leading_v() {
        assert_eq!(compare_versions("v1.0.0", "1.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("v2.1.0", "2.0.5"), Ordering::Greater);
    }

    #[test]
    fn missing_components_count_as_zero() {
        assert_eq!(compare_versions("1.0", "1.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("2", "1.9.9"), Ordering::Greater);
    }

    #[test]
    fn non_numeric_versions_compare_as_zero() {
        // Known edge case, preserved on purpose: textual versions have no
        // lexicographic fallback and are unordered relative to each other.
        assert_eq!(compare_versions("abc", "xyz"), Ordering::Equal);
        assert_eq!(compare_versions("Unreleased", "0.0.1"), Ordering::Less);
        assert_eq!(compare_versions("1.0.0", "abc"), Ordering::Greater);
    }
}
