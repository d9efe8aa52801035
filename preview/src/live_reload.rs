//! Client-side reload support.
//!
//! The served page polls `/api/check` once a second and reloads itself when
//! the watcher reports a change. The script is spliced into the rendered
//! HTML just before `</body>` so templates need no special support.

const RELOAD_SCRIPT: &str = r#"<script>
(function () {
  setInterval(function () {
    fetch('/api/check')
      .then(function (res) { return res.json(); })
      .then(function (body) {
        if (body.changed) {
          location.reload();
        }
      })
      .catch(function () { /* server restarting, try again next tick */ });
  }, 1000);
})();
</script>
"#;

/// Inject the polling script into a rendered page.
///
/// Splices before the closing `</body>` tag when present, otherwise appends
/// to the end of the document.
pub(crate) fn inject_reload_script(html: &str) -> String {
    match html.rfind("</body>") {
        Some(pos) => {
            let mut output = String::with_capacity(html.len() + RELOAD_SCRIPT.len());
            output.push_str(&html[..pos]);
            output.push_str(RELOAD_SCRIPT);
            output.push_str(&html[pos..]);
            output
        }
        None => {
            let mut output = html.to_string();
            output.push_str(RELOAD_SCRIPT);
            output
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_lands_before_closing_body_tag() {
        let html = "<html><body><p>hi</p></body></html>";
        let output = inject_reload_script(html);

        let script_pos = output.find("/api/check").unwrap();
        let body_pos = output.find("</body>").unwrap();
        assert!(script_pos < body_pos);
        assert!(output.ends_with("</body></html>"));
    }

    #[test]
    fn script_appended_when_no_body_tag() {
        let output = inject_reload_script("<p>fragment</p>");
        assert!(output.starts_with("<p>fragment</p>"));
        assert!(output.contains("location.reload()"));
    }

    #[test]
    fn last_body_tag_wins() {
        let html = "<body>example: </body> literal</body>";
        let output = inject_reload_script(html);
        assert!(output.ends_with("</body>"));
    }
}
