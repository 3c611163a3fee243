//! Pure document renderer.
//!
//! Buffers are embedded verbatim. Nothing is escaped: a style buffer that
//! contains `</style>` or a script buffer that contains `</script>` changes
//! the structure of the result, exactly as it would in a hand-written page.

use crate::constants::{PREVIEW_DOCUMENT_TITLE, SCRIPT_ERROR_PREFIX};

const BASE_STYLE: &str = "body { margin: 0; padding: 0; font-family: sans-serif; }";

/// Compose the preview document from the three buffers.
///
/// Ordering is fixed: style in the head, then markup in the body, then the
/// script wrapped in a `try`/`catch` that appends a red error notice to the
/// body instead of letting the fault escape.
///
/// # Returns
/// A self-contained HTML document. Identical inputs produce byte-identical
/// output.
pub fn render_document(markup: &str, style: &str, script: &str) -> String {
    let mut doc = String::with_capacity(
        markup.len() + style.len() + script.len() + BASE_STYLE.len() + 1024,
    );
    doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    doc.push_str("<meta charset=\"UTF-8\">\n");
    doc.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    doc.push_str("<title>");
    doc.push_str(PREVIEW_DOCUMENT_TITLE);
    doc.push_str("</title>\n<style>\n");
    doc.push_str(BASE_STYLE);
    doc.push('\n');
    doc.push_str(style);
    doc.push_str("\n</style>\n</head>\n<body>\n");
    doc.push_str(markup);
    doc.push_str("\n<script>\ntry {\n");
    doc.push_str(script);
    doc.push_str("\n} catch (error) {\n");
    doc.push_str("  console.error('Error in JavaScript:', error);\n");
    doc.push_str("  const errorDiv = document.createElement('div');\n");
    doc.push_str("  errorDiv.style.color = 'red';\n");
    doc.push_str("  errorDiv.textContent = '");
    doc.push_str(SCRIPT_ERROR_PREFIX);
    doc.push_str("' + error.message;\n");
    doc.push_str("  document.body.appendChild(errorDiv);\n");
    doc.push_str("}\n</script>\n</body>\n</html>\n");
    doc
}

#[cfg(test)]
mod tests {
    use super::render_document;
    use crate::defaults::{DEFAULT_MARKUP, DEFAULT_SCRIPT, DEFAULT_STYLE};

    fn default_document() -> String {
        render_document(DEFAULT_MARKUP, DEFAULT_STYLE, DEFAULT_SCRIPT)
    }

    #[test]
    fn sections_appear_in_style_markup_script_order() {
        let doc = render_document("<p>MARK</p>", "p { color: STYLE; }", "let SCRIPT = 1;");
        let style_at = doc.find("STYLE").expect("style");
        let markup_at = doc.find("MARK").expect("markup");
        let script_at = doc.find("SCRIPT").expect("script");
        assert!(style_at < doc.find("</head>").expect("head close"));
        assert!(style_at < markup_at && markup_at < script_at);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.trim_end().ends_with("</html>"));
    }

    #[test]
    fn default_document_has_one_style_and_one_guarded_script() {
        let doc = default_document();
        assert_eq!(doc.matches("<style>").count(), 1);
        assert_eq!(doc.matches("</style>").count(), 1);
        assert_eq!(doc.matches("<script>").count(), 1);
        assert_eq!(doc.matches("</script>").count(), 1);
        let script_body = &doc[doc.find("<script>").expect("open")..];
        assert!(script_body.contains("try {"));
        assert!(script_body.contains("} catch (error) {"));
    }

    #[test]
    fn buffers_are_embedded_verbatim() {
        let markup = "<div>&amp; \"quoted\" <b>bold</b></div>";
        let style = "a::after { content: '</tag>'; }";
        let script = "const s = `${1 + 1}` + '\\n';";
        let doc = render_document(markup, style, script);
        assert!(doc.contains(markup));
        assert!(doc.contains(style));
        assert!(doc.contains(script));
    }

    #[test]
    fn error_notice_is_red_and_prefixed() {
        let doc = render_document("", "", "undefinedVariable.explode();");
        assert!(doc.contains("errorDiv.style.color = 'red';"));
        assert!(doc.contains("errorDiv.textContent = 'JavaScript Error: ' + error.message;"));
        assert!(doc.contains("document.body.appendChild(errorDiv);"));
        assert!(doc.contains("console.error('Error in JavaScript:', error);"));
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(default_document(), default_document());
    }

    #[test]
    fn shell_is_present_for_empty_buffers() {
        let doc = render_document("", "", "");
        assert!(doc.contains("<title>Code Output</title>"));
        assert!(doc.contains("<meta charset=\"UTF-8\">"));
        assert!(doc.contains("name=\"viewport\""));
        assert!(doc.contains("<body>"));
    }

    #[test]
    fn default_buffers_wire_the_click_counter() {
        let doc = default_document();
        assert!(doc.contains("id=\"myButton\""));
        assert!(doc.contains("id=\"dynamic-text\""));
        assert!(doc.contains("clickCount++"));
        assert!(doc.contains("You clicked the button ${clickCount} time(s)!"));
    }
}
