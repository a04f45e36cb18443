//! HTML escaping for user-supplied text echoed back in responses.
//!
//! Stored values are kept as submitted; escaping happens on the way out so
//! rows written by any client are neutralized before they reach a browser.

/// Escape `&`, `<` and `>` so markup in `text` renders as literal characters.
pub fn escape_text(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_script_tag() {
        assert_eq!(
            escape_text("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_ampersand_and_plain_text() {
        assert_eq!(escape_text("Groceries & errands"), "Groceries &amp; errands");
        assert_eq!(escape_text("Important"), "Important");
        assert_eq!(escape_text(""), "");
    }

    #[test]
    fn test_escape_image_onerror() {
        let escaped = escape_text(r#"Bad image <img src="x" onerror="alert(document.cookie);">"#);
        assert!(!escaped.contains('<'));
        assert!(escaped.starts_with("Bad image &lt;img"));
    }
}
