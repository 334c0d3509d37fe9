use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Render `input` inert for HTML.
///
/// Produces the same text a browser serializes for a text node holding
/// `input`: `&`, `<`, `>` and the no-break space become entities, every
/// other character (quotes included) is left alone.
pub fn sanitize_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Trim and sanitize every string field of a submitted form.
///
/// Fields whose value is not a JSON string are dropped from the result.
pub fn sanitize_form_data(data: &Map<String, Value>) -> BTreeMap<String, String> {
    data.iter()
        .filter_map(|(key, value)| {
            value
                .as_str()
                .map(|text| (key.clone(), sanitize_html(text.trim())))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_safe_input_is_unchanged() {
        let input = "Mens Casual Premium Slim Fit T-Shirts 'extra' \"quoted\"";
        assert_eq!(sanitize_html(input), input);
    }

    #[test]
    fn test_script_tag_is_neutralized() {
        let output = sanitize_html("<script>alert('x')</script>");
        assert_eq!(output, "&lt;script&gt;alert('x')&lt;/script&gt;");
        assert!(!output.contains('<'));
        assert!(!output.contains('>'));
    }

    #[test]
    fn test_ampersand_and_nbsp() {
        assert_eq!(sanitize_html("Fish & Chips"), "Fish &amp; Chips");
        assert_eq!(sanitize_html("&amp;"), "&amp;amp;");
        assert_eq!(sanitize_html("a\u{a0}b"), "a&nbsp;b");
    }

    #[test]
    fn test_form_data_drops_non_strings() {
        let form = json!({
            "name": "  Jane <b>Doe</b> ",
            "email": "jane@example.com",
            "age": 42,
            "subscribed": true,
            "tags": ["a", "b"],
            "note": null
        });
        let sanitized = sanitize_form_data(form.as_object().unwrap());

        assert_eq!(sanitized.len(), 2);
        assert_eq!(sanitized["name"], "Jane &lt;b&gt;Doe&lt;/b&gt;");
        assert_eq!(sanitized["email"], "jane@example.com");
    }
}
