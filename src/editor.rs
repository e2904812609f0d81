use anyhow::Context;

use crate::{eid::Eid, items::ItemKind};

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct EditorItem {
    pub title: String,
    /// Bookmarks only.
    pub url: Option<String>,
    pub tags: String,
    /// Description for bookmarks, content for notes.
    pub body: String,
}

fn parse_editor_item(input: &str, kind: ItemKind) -> anyhow::Result<EditorItem> {
    enum CurrLine {
        Title,
        Url,
        Tags,
        Body,
        None,
    }

    let mut curr_line = CurrLine::None;

    let mut url = String::new();
    let mut title = String::new();
    let mut tags = String::new();
    let mut body = String::new();

    for line in input.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("# TITLE") {
            curr_line = CurrLine::Title;
            continue;
        }

        if trimmed.starts_with("# URL") {
            curr_line = CurrLine::Url;
            continue;
        }

        if trimmed.starts_with("# TAGS") {
            curr_line = CurrLine::Tags;
            continue;
        }

        if trimmed.starts_with("# DESCRIPTION") || trimmed.starts_with("# CONTENT") {
            curr_line = CurrLine::Body;
            continue;
        }

        if trimmed.starts_with("# CURRENT TAGS FOR REFERENCE") {
            break;
        }

        match curr_line {
            CurrLine::Body => {
                body.push('\n');
                body.push_str(line);
            }
            _ if trimmed.is_empty() => {}
            CurrLine::Title => {
                title = trimmed.to_string();
                curr_line = CurrLine::None;
            }
            CurrLine::Url => {
                url = trimmed.to_string();
                curr_line = CurrLine::None;
            }
            CurrLine::Tags => {
                tags = trimmed.to_string();
                curr_line = CurrLine::None;
            }
            CurrLine::None => {}
        };
    }

    let title = title.trim().to_string();
    let body = body.trim().to_string();

    if title.is_empty() {
        anyhow::bail!("title cannot be empty!")
    }

    let url = match kind {
        ItemKind::Bookmark => {
            let url = url.trim().to_string();
            if url.is_empty() {
                anyhow::bail!("url cannot be empty!")
            }
            Some(url)
        }
        ItemKind::Note => None,
    };

    Ok(EditorItem {
        title,
        url,
        tags: tags.trim().to_string(),
        body,
    })
}

fn template(kind: ItemKind, defaults: &EditorItem, current_tags: &[String]) -> String {
    let mut out = format!("# TITLE (one line):\n{}\n", defaults.title);
    if kind == ItemKind::Bookmark {
        out.push_str(&format!(
            "# URL (one line):\n{}\n",
            defaults.url.clone().unwrap_or_default()
        ));
    }
    out.push_str(&format!(
        "# TAGS (one line, comma separated):\n{}\n",
        defaults.tags
    ));
    match kind {
        ItemKind::Bookmark => out.push_str("# DESCRIPTION (multi-line):\n"),
        ItemKind::Note => out.push_str("# CONTENT (multi-line, HTML allowed):\n"),
    }
    out.push_str(&defaults.body);
    out.push_str("\n\n\n\n\n");
    out.push_str("# CURRENT TAGS FOR REFERENCE AND AUTOCOMPLETION (do not change this line)\n");
    out.push_str(&current_tags.join(" "));
    out.push('\n');
    out
}

/// Opens `$EDITOR` on a form prefilled with `defaults` and parses the result.
pub fn edit(
    kind: ItemKind,
    defaults: &EditorItem,
    current_tags: &[String],
) -> anyhow::Result<EditorItem> {
    let editor = std::env::var("EDITOR").unwrap_or("vim".into());

    let temp_file = std::env::temp_dir().join(format!("nexus-{}.md", Eid::new()));
    std::fs::write(&temp_file, template(kind, defaults, current_tags))
        .context("error writing temp file")?;

    let shell = std::env::var("SHELL").unwrap_or("/bin/sh".into());
    let status = std::process::Command::new(shell)
        .arg("-c")
        .arg(format!("{editor} \"{}\"", temp_file.display()))
        .status()
        .context("failed to run editor")?;

    let content = std::fs::read_to_string(&temp_file).context("error reading temp file")?;
    std::fs::remove_file(&temp_file).context("error deleting temp file")?;

    if !status.success() {
        anyhow::bail!("editor exited with {status}");
    }

    parse_editor_item(&content, kind)
}
