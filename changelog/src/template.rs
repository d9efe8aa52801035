//! Template handling.
//!
//! Substitution is not a templating language: the release
//! markup is spliced between two literal marker comments and three
//! placeholders are replaced globally. The mechanism sits behind the
//! `TemplateEngine` trait so a host can swap in a real engine without
//! touching the renderer contract. Template authors must not nest the
//! marker comments.

use crate::error::{ChangelogError, Result};

pub const START_MARKER: &str = "<!-- START_RELEASES -->";
pub const END_MARKER: &str = "<!-- END_RELEASES -->";

/// Values for the global placeholders
#[derive(Debug, Clone, Default)]
pub struct TemplateVars {
    pub title: String,
    pub author: String,
    pub description: String,
}

pub trait TemplateEngine: Send + Sync {
    /// Substitute placeholders and splice the release body into the
    /// template.
    ///
    /// # Errors
    /// Returns `ChangelogError::Template` when the template is missing a
    /// required marker.
    fn substitute(&self, template: &str, vars: &TemplateVars, body: &str) -> Result<String>;
}

/// Literal marker-replace engine, the default
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerTemplate;

impl TemplateEngine for MarkerTemplate {
    fn substitute(&self, template: &str, vars: &TemplateVars, body: &str) -> Result<String> {
        let start = template
            .find(START_MARKER)
            .ok_or_else(|| ChangelogError::Template(format!("missing {START_MARKER} marker")))?;
        let end = template
            .find(END_MARKER)
            .ok_or_else(|| ChangelogError::Template(format!("missing {END_MARKER} marker")))?;

        if end < start {
            return Err(ChangelogError::Template(
                "release markers are out of order".to_string(),
            ));
        }

        let mut output = String::with_capacity(template.len() + body.len());
        output.push_str(&template[..start]);
        output.push_str(START_MARKER);
        output.push('\n');
        output.push_str(body);
        output.push('\n');
        output.push_str(&template[end..]);

        Ok(output
            .replace("{{TITLE}}", &vars.title)
            .replace("{{AUTHOR}}", &vars.author)
            .replace("{{DESCRIPTION}}", &vars.description))
    }
}

/// Look up a built-in template by name.
///
/// # Errors
/// Returns `ChangelogError::TemplateNotFound` for unknown names.
pub fn builtin_template(name: &str) -> Result<&'static str> {
    match name {
        "default" => Ok(include_str!("../templates/default.html")),
        "professional" => Ok(include_str!("../templates/professional.html")),
        other => Err(ChangelogError::TemplateNotFound(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<html><h1>{{TITLE}}</h1><p>{{DESCRIPTION}}</p>\
        <ul><!-- START_RELEASES -->old<!-- END_RELEASES --></ul>\
        <footer>{{AUTHOR}} / {{TITLE}}</footer></html>";

    fn vars() -> TemplateVars {
        TemplateVars {
            title: "My Changelog".to_string(),
            author: "The Team".to_string(),
            description: "What changed".to_string(),
        }
    }

    #[test]
    fn splices_body_between_markers() {
        let output = MarkerTemplate.substitute(TEMPLATE, &vars(), "<li>r1</li>").unwrap();
        assert!(output.contains("<!-- START_RELEASES -->\n<li>r1</li>\n<!-- END_RELEASES -->"));
        assert!(!output.contains("old"));
    }

    #[test]
    fn placeholders_replace_globally() {
        let output = MarkerTemplate.substitute(TEMPLATE, &vars(), "").unwrap();
        assert_eq!(output.matches("My Changelog").count(), 2);
        assert!(output.contains("The Team"));
        assert!(output.contains("What changed"));
    }

    #[test]
    fn missing_end_marker_is_a_template_error() {
        let err = MarkerTemplate
            .substitute("<!-- START_RELEASES -->", &vars(), "x")
            .unwrap_err();
        assert!(matches!(err, ChangelogError::Template(_)));
    }

    #[test]
    fn missing_start_marker_is_a_template_error() {
        let err = MarkerTemplate
            .substitute("<!-- END_RELEASES -->", &vars(), "x")
            .unwrap_err();
        assert!(matches!(err, ChangelogError::Template(_)));
    }

    #[test]
    fn builtin_templates_carry_both_markers() {
        for name in ["default", "professional"] {
            let template = builtin_template(name).unwrap();
            assert!(template.contains(START_MARKER), "{name} missing start");
            assert!(template.contains(END_MARKER), "{name} missing end");
            assert!(template.contains("{{TITLE}}"), "{name} missing title");
        }
    }

    #[test]
    fn unknown_template_name_errors() {
        assert!(matches!(
            builtin_template("missing"),
            Err(ChangelogError::TemplateNotFound(_))
        ));
    }
}
