use indexmap::IndexMap;
use serde::Serialize;

/// Ordered map of normalized section name to its change items.
///
/// Insertion order reflects document order, both for sections and for the
/// items within each section.
pub type Sections = IndexMap<String, Vec<ChangeItem>>;

/// A single change entry within a release section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeItem {
    /// Content after the list marker, `[badge]` prefix retained
    pub text: String,
    /// Original line from the document
    pub raw: String,
}

/// One versioned entry in the changelog, corresponding to one `##` heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    pub version: String,
    /// ISO-8601 date (YYYY-MM-DD)
    pub date: String,
    /// Raw heading text
    pub title: String,
    pub sections: Sections,
}

impl Release {
    /// Items in the named section, or an empty slice when absent
    #[must_use]
    pub fn section(&self, name: &str) -> &[ChangeItem] {
        self.sections.get(name).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        !self.section(name).is_empty()
    }
}
