//! Turning items and annotated spans into terminal or HTML output.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    html::escape,
    items::Item,
    search::{self, Span},
};

/// ANSI codes used for terminal output.
pub mod colors {
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    /// Bold underlined yellow, for matched words.
    pub const MATCH: &str = "\x1b[1;4;33m";
    pub const RESET: &str = "\x1b[0m";
}

/// How matched words are marked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HighlightStyle {
    #[default]
    Ansi,
    /// HTML `<mark>` elements; all text is escaped.
    Mark,
    None,
}

pub fn render_spans(spans: &[Span<'_>], style: HighlightStyle) -> String {
    let mut out = String::new();
    for span in spans {
        match (style, span.matched) {
            (HighlightStyle::Ansi, true) => {
                out.push_str(colors::MATCH);
                out.push_str(span.text);
                out.push_str(colors::RESET);
            }
            (HighlightStyle::Mark, true) => {
                out.push_str("<mark>");
                out.push_str(&escape(span.text));
                out.push_str("</mark>");
            }
            (HighlightStyle::Mark, false) => out.push_str(&escape(span.text)),
            _ => out.push_str(span.text),
        }
    }
    out
}

fn styled(text: &str, code: &str, style: HighlightStyle) -> String {
    match style {
        HighlightStyle::Ansi => format!("{code}{text}{}", colors::RESET),
        _ => text.to_string(),
    }
}

/// Whitespace-collapsed body, cut to `max_chars` characters.
pub fn preview(body: &str, max_chars: usize) -> String {
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let mut cut: String = collapsed.chars().take(max_chars).collect();
    cut.push('…');
    cut
}

/// Multi-line card for one item with every field highlighted against `query`.
pub fn render_card(item: &Item, query: &str, style: HighlightStyle, preview_chars: usize) -> String {
    let mut lines = vec![];

    let title = render_spans(&search::annotate(item.title(), query), style);
    lines.push(format!(
        "{} {} {}",
        styled(&format!("[{}]", item.kind()), colors::CYAN, style),
        styled(&title, colors::BOLD, style),
        styled(&format!("({})", item.id()), colors::DIM, style),
    ));

    if let Item::Bookmark(b) = item {
        lines.push(format!("  {}", b.url));
    }

    if !item.tags().is_empty() {
        let tags = item
            .tags()
            .iter()
            .map(|t| {
                let label = format!("#{t}");
                render_spans(&search::annotate_tag(&label, query), style)
            })
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("  {tags}"));
    }

    let body = item.body_text().map(|b| preview(&b, preview_chars));
    let spans = search::annotate_opt(body.as_deref(), query);
    if !spans.is_empty() {
        lines.push(format!("  {}", render_spans(&spans, style)));
    }

    lines.join("\n")
}

/// HTML fragment for one item, matched words wrapped in `<mark>`.
pub fn render_html(item: &Item, query: &str, preview_chars: usize) -> String {
    let style = HighlightStyle::Mark;
    let mut out = format!(
        "<article data-id=\"{}\" data-type=\"{}\">\n  <h3>{}</h3>\n",
        escape(item.id()),
        item.kind(),
        render_spans(&search::annotate(item.title(), query), style)
    );

    if let Item::Bookmark(b) = item {
        out.push_str(&format!(
            "  <a href=\"{0}\">{0}</a>\n",
            escape(&b.url)
        ));
    }

    for tag in item.tags() {
        let label = format!("#{tag}");
        out.push_str(&format!(
            "  <span class=\"tag\">{}</span>\n",
            render_spans(&search::annotate_tag(&label, query), style)
        ));
    }

    if let Some(body) = item.body_text() {
        let body = preview(&body, preview_chars);
        out.push_str(&format!(
            "  <p>{}</p>\n",
            render_spans(&search::annotate(&body, query), style)
        ));
    }

    out.push_str("</article>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{eid::Eid, items::Bookmark};
    use chrono::Utc;

    fn bookmark() -> Item {
        Item::Bookmark(Bookmark {
            id: Eid::from("b1"),
            title: "React Hooks".into(),
            url: "https://react.dev".into(),
            description: Some("State & effects, explained.".into()),
            tags: vec!["react".into(), "frontend".into()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
            favicon_data_url: None,
        })
    }

    #[test]
    fn test_render_spans_mark() {
        let spans = search::annotate("Hooks & <stuff>", "hoks");
        assert_eq!(
            render_spans(&spans, HighlightStyle::Mark),
            "<mark>Hooks</mark> &amp; &lt;stuff&gt;"
        );
    }

    #[test]
    fn test_render_spans_ansi() {
        let spans = search::annotate("React Hooks", "react");
        assert_eq!(
            render_spans(&spans, HighlightStyle::Ansi),
            format!("{}React{} Hooks", colors::MATCH, colors::RESET)
        );
    }

    #[test]
    fn test_render_spans_none_is_original_text() {
        let spans = search::annotate("React Hooks", "react");
        assert_eq!(render_spans(&spans, HighlightStyle::None), "React Hooks");
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("  a\n\n b  ", 10), "a b");
        assert_eq!(preview("abcdef", 3), "abc…");
    }

    #[test]
    fn test_render_card_plain() {
        let card = render_card(&bookmark(), "", HighlightStyle::None, 200);
        assert_eq!(
            card,
            "[bookmark] React Hooks (b1)\n  https://react.dev\n  #react #frontend\n  State & effects, explained."
        );
    }

    #[test]
    fn test_render_card_marks_tag() {
        let card = render_card(&bookmark(), "react", HighlightStyle::Ansi, 200);
        assert!(card.contains(&format!("{}#react{}", colors::MATCH, colors::RESET)));
    }

    #[test]
    fn test_render_html() {
        let html = render_html(&bookmark(), "effects", 200);
        assert!(html.contains("<mark>effects</mark>"));
        assert!(html.contains("State &amp; "));
        assert!(html.starts_with("<article data-id=\"b1\" data-type=\"bookmark\">"));
    }
}
