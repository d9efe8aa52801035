//! Line-oriented markdown tokenizer.
//!
//! Changelogs are highly regular (heading-per-release, list-per-change), so
//! each non-blank line maps to exactly one token. Nested or multi-line
//! constructs are out of scope.

use crate::utils::{HEADING_PATTERN, LIST_ITEM_PATTERN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Heading,
    ListItem,
    Text,
}

/// One token per non-blank line, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Heading level 1-6; `None` for non-headings
    pub level: Option<u8>,
    /// Trimmed content with markers stripped
    pub text: String,
    /// Original line as seen in the document
    pub raw: String,
}

/// Split raw markdown into a flat sequence of typed tokens.
///
/// Blank lines produce no token. Classification priority: heading, list
/// item, plain text.
#[must_use]
pub fn tokenize(markdown: &str) -> Vec<Token> {
    markdown
        .lines()
        .filter_map(|line| parse_line(line.trim()))
        .collect()
}

fn parse_line(line: &str) -> Option<Token> {
    if line.is_empty() {
        return None;
    }

    if let Some(captures) = HEADING_PATTERN.captures(line) {
        return Some(Token {
            kind: TokenKind::Heading,
            level: Some(captures[1].len() as u8),
            text: captures[2].trim().to_string(),
            raw: line.to_string(),
        });
    }

    if let Some(captures) = LIST_ITEM_PATTERN.captures(line) {
        return Some(Token {
            kind: TokenKind::ListItem,
            level: None,
            text: captures[1].trim().to_string(),
            raw: line.to_string(),
        });
    }

    Some(Token {
        kind: TokenKind::Text,
        level: None,
        text: line.to_string(),
        raw: line.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_produce_no_tokens() {
        let tokens = tokenize("\n\n   \n");
        assert!(tokens.is_empty());
    }

    #[test]
    fn release_heading_is_level_two() {
        let tokens = tokenize("## 1.0.0 (2024-01-01)");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Heading);
        assert_eq!(tokens[0].level, Some(2));
        assert_eq!(tokens[0].text, "1.0.0 (2024-01-01)");
    }

    #[test]
    fn list_item_strips_marker() {
        let tokens = tokenize("- item");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::ListItem);
        assert_eq!(tokens[0].text, "item");
        assert_eq!(tokens[0].raw, "- item");
    }

    #[test]
    fn star_and_plus_markers_are_list_items() {
        let tokens = tokenize("* starred\n+ plussed");
        assert_eq!(tokens[0].kind, TokenKind::ListItem);
        assert_eq!(tokens[0].text, "starred");
        assert_eq!(tokens[1].kind, TokenKind::ListItem);
        assert_eq!(tokens[1].text, "plussed");
    }

    #[test]
    fn plain_lines_are_text_tokens() {
        let tokens = tokenize("Some prose between sections");
        assert_eq!(tokens[0].kind, TokenKind::Text);
        assert_eq!(tokens[0].text, "Some prose between sections");
    }

    #[test]
    fn heading_levels_one_through_six() {
        let tokens = tokenize("# a\n###### b");
        assert_eq!(tokens[0].level, Some(1));
        assert_eq!(tokens[1].level, Some(6));
    }

    #[test]
    fn seven_hashes_is_not_a_heading() {
        let tokens = tokenize("####### too deep");
        assert_eq!(tokens[0].kind, TokenKind::Text);
    }

    #[test]
    fn tokens_preserve_document_order() {
        let tokens = tokenize("## 1.0.0\n### Fixes\n- one\n- two");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Heading,
                TokenKind::Heading,
                TokenKind::ListItem,
                TokenKind::ListItem
            ]
        );
    }
}
