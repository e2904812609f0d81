use once_cell::sync::Lazy;
use scraper::{Html, Selector};

/// Scheme used by internal links between notes.
pub const NOTE_LINK_SCHEME: &str = "nexus-note://";

static NOTE_LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[href^="nexus-note://"]"#).expect("valid selector"));

/// Text content of an HTML fragment, the way a browser's `textContent` reads it.
pub fn strip_html(html: &str) -> String {
    Html::parse_fragment(html).root_element().text().collect()
}

/// Ids of notes linked from `html`, in document order.
pub fn linked_note_ids(html: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(html);
    fragment
        .select(&NOTE_LINK_SELECTOR)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| href.strip_prefix(NOTE_LINK_SCHEME))
        .filter(|id| !id.is_empty())
        .map(|id| id.to_string())
        .collect()
}

/// Paragraph holding a link to another note.
pub fn note_link(id: &str, title: &str) -> String {
    format!(
        r#"<p><a href="{NOTE_LINK_SCHEME}{}">{}</a></p>"#,
        escape(id),
        escape(title)
    )
}

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html() {
        let html = "<h2>Meeting Notes</h2><p>Offline-first is a <strong>must</strong>.</p>";
        assert_eq!(strip_html(html), "Meeting NotesOffline-first is a must.");
    }

    #[test]
    fn test_strip_html_decodes_entities() {
        assert_eq!(strip_html("<p>Fish &amp; Chips</p>"), "Fish & Chips");
    }

    #[test]
    fn test_strip_plain_text_is_unchanged() {
        assert_eq!(strip_html("just text"), "just text");
    }

    #[test]
    fn test_linked_note_ids() {
        let html = r#"<p>See <a href="nexus-note://demo-note-1">ideas</a> and
            <a href="https://example.com">site</a> and <a href="nexus-note://n2">goals</a></p>"#;
        assert_eq!(linked_note_ids(html), vec!["demo-note-1", "n2"]);
    }

    #[test]
    fn test_note_link_round_trips() {
        let link = note_link("n1", "Fish & <Chips>");
        assert_eq!(linked_note_ids(&link), vec!["n1"]);
        assert_eq!(strip_html(&link), "Fish & <Chips>");
    }
}
