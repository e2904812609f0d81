use std::io::{self, IsTerminal};
use std::path::PathBuf;

use inquire::error::InquireResult;

use crate::{
    app::App,
    backup::{self, ExportTarget},
    cli::{
        errors::{CliError, CliResult},
        validation::*,
        OutputFormat,
    },
    demo,
    editor::{self, EditorItem},
    errors::AppError,
    filter::{ItemQuery, SortKey, SortOrder, View},
    html,
    items::{parse_tags, Item, ItemCreate, ItemKind, ItemUpdate},
    render::{self, HighlightStyle},
    search,
};

/// Asks for confirmation unless `yes` was passed.
fn confirm(yes: bool, message: &str) -> CliResult<bool> {
    if yes {
        return Ok(true);
    }

    match inquire::prompt_confirmation(message) {
        InquireResult::Ok(answer) => Ok(answer),
        InquireResult::Err(err) => Err(err.into()),
    }
}

/// ANSI codes are dropped when stdout is not a terminal.
fn output_style(style: HighlightStyle) -> HighlightStyle {
    match style {
        HighlightStyle::Ansi if !io::stdout().is_terminal() => HighlightStyle::None,
        style => style,
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parameters for creating a search command
#[derive(Debug, Clone, Default)]
pub struct SearchCommandParams {
    pub terms: Vec<String>,
    pub view: Option<View>,
    pub tag: Option<String>,
    pub sort: Option<SortKey>,
    pub order: Option<SortOrder>,
    pub limit: Option<usize>,
    pub count: bool,
    pub format: OutputFormat,
}

/// Command for searching items
#[derive(Debug, Clone)]
pub struct SearchCommand {
    pub query: ItemQuery,
    pub count_only: bool,
    pub format: OutputFormat,
}

impl SearchCommand {
    /// Unset parameters fall back to `defaults`.
    pub fn new(params: SearchCommandParams, defaults: ItemQuery) -> CliResult<Self> {
        if params.limit == Some(0) {
            return Err(CliError::validation("limit", "Limit must be greater than 0"));
        }

        let tag = match params.tag {
            Some(tag) => {
                let tag = tag.trim().trim_start_matches('#').to_string();
                if tag.is_empty() {
                    return Err(CliError::validation("tag", "Tag cannot be empty"));
                }
                Some(tag)
            }
            None => None,
        };

        let search = params.terms.join(" ");

        let query = ItemQuery {
            view: params.view.unwrap_or(defaults.view),
            tag,
            search: (!search.trim().is_empty()).then_some(search),
            sort_key: params.sort.unwrap_or(defaults.sort_key),
            sort_order: params.order.unwrap_or(defaults.sort_order),
            limit: params.limit,
        };

        Ok(Self {
            query,
            count_only: params.count,
            format: params.format,
        })
    }

    pub fn execute(self, app: &App) -> CliResult<()> {
        let items = app.search(&self.query);

        if self.count_only {
            println!("{} items found", items.len());
            return Ok(());
        }

        let query = self.query.search_term().unwrap_or_default();
        let preview_chars = app.config.body_preview_chars;

        match self.format {
            OutputFormat::Json => print_json(&items)?,
            OutputFormat::Text if items.is_empty() => println!("No items found."),
            OutputFormat::Text => {
                let style = output_style(app.config.highlight);
                let cards = items
                    .iter()
                    .map(|item| render::render_card(item, query, style, preview_chars))
                    .collect::<Vec<_>>();
                println!("{}", cards.join("\n\n"));
            }
            OutputFormat::Html => {
                for item in &items {
                    println!("{}", render::render_html(item, query, preview_chars));
                }
            }
        }

        Ok(())
    }
}

/// Command for adding bookmarks and notes
#[derive(Debug, Clone)]
pub struct AddCommand {
    pub kind: ItemKind,
    pub title: Option<String>,
    /// Bookmarks only
    pub url: Option<String>,
    /// Description for bookmarks, content for notes
    pub body: Option<String>,
    pub tags: Option<String>,
    pub use_editor: bool,
}

impl AddCommand {
    pub fn new(
        kind: ItemKind,
        title: Option<String>,
        url: Option<String>,
        body: Option<String>,
        tags: Option<String>,
        use_editor: bool,
    ) -> CliResult<Self> {
        if let Some(ref url) = url {
            validate_url(url)?;
        }
        if let Some(ref tags) = tags {
            validate_tags(tags)?;
        }
        if let (ItemKind::Bookmark, Some(description)) = (kind, &body) {
            validate_description(description)?;
        }

        Ok(Self {
            kind,
            title,
            url,
            body,
            tags,
            use_editor,
        })
    }

    pub fn execute(self, app: &App) -> CliResult<()> {
        let Self {
            kind,
            mut title,
            mut url,
            mut body,
            mut tags,
            use_editor,
        } = self;

        if use_editor {
            let defaults = EditorItem {
                title: title.unwrap_or_default(),
                url: url.clone(),
                tags: tags.unwrap_or_default(),
                body: body.unwrap_or_default(),
            };

            let edited = editor::edit(kind, &defaults, &app.all_tags())
                .map_err(|e| CliError::invalid_input(e.to_string()))?;

            title = Some(edited.title);
            url = edited.url;
            tags = Some(edited.tags);
            body = Some(edited.body);
        }

        let title = title.unwrap_or_default();
        validate_title(&title)?;
        if let Some(ref tags) = tags {
            validate_tags(tags)?;
        }

        let create = match kind {
            ItemKind::Bookmark => {
                let url = url.unwrap_or_default();
                validate_url(&url)?;
                ItemCreate {
                    kind,
                    title,
                    tags: tags.map(|t| parse_tags(&t)),
                    url: Some(url),
                    description: body,
                    content: None,
                }
            }
            ItemKind::Note => {
                let content = body.unwrap_or_default();
                validate_content(&content)?;
                ItemCreate {
                    kind,
                    title,
                    tags: tags.map(|t| parse_tags(&t)),
                    url: None,
                    description: None,
                    content: Some(content),
                }
            }
        };

        let item = app.items.create(create)?;
        print_json(&item)
    }
}

/// Command for updating a single item
#[derive(Debug, Clone)]
pub struct EditCommand {
    pub id: String,
    pub update: ItemUpdate,
    pub use_editor: bool,
}

impl EditCommand {
    pub fn new(id: String, update: ItemUpdate, tags: Option<String>, use_editor: bool) -> CliResult<Self> {
        if let Some(ref title) = update.title {
            validate_title(title)?;
        }
        if let Some(ref url) = update.url {
            validate_url(url)?;
        }
        if let Some(ref description) = update.description {
            validate_description(description)?;
        }
        if let Some(ref content) = update.content {
            validate_content(content)?;
        }
        if let Some(ref tags) = tags {
            validate_tags(tags)?;
        }

        Ok(Self {
            id,
            update: ItemUpdate {
                tags: tags.map(|t| parse_tags(&t)),
                ..update
            },
            use_editor,
        })
    }

    pub fn execute(self, app: &App) -> CliResult<()> {
        let update = if self.use_editor {
            let item = app.items.get(&self.id)?;
            editor_update(&item, &app.all_tags())?
        } else {
            self.update
        };

        if update.is_empty() {
            println!("This update request does nothing");
            return Ok(());
        }

        let item = app.items.update(&self.id, update)?;
        print_json(&item)
    }
}

fn editor_update(item: &Item, current_tags: &[String]) -> CliResult<ItemUpdate> {
    let defaults = EditorItem {
        title: item.title().to_string(),
        url: match item {
            Item::Bookmark(b) => Some(b.url.clone()),
            Item::Note(_) => None,
        },
        tags: item.tags().join(", "),
        body: match item {
            Item::Bookmark(b) => b.description.clone().unwrap_or_default(),
            Item::Note(n) => n.content.clone(),
        },
    };

    let edited = editor::edit(item.kind(), &defaults, current_tags)
        .map_err(|e| CliError::invalid_input(e.to_string()))?;

    validate_tags(&edited.tags)?;

    let mut update = ItemUpdate {
        title: Some(edited.title),
        tags: Some(parse_tags(&edited.tags)),
        ..Default::default()
    };
    match item.kind() {
        ItemKind::Bookmark => {
            update.url = edited.url;
            update.description = Some(edited.body);
        }
        ItemKind::Note => update.content = Some(edited.body),
    }

    Ok(update)
}

/// Prints one item in full, followed by the notes it links to.
#[derive(Debug, Clone)]
pub struct ShowCommand {
    pub id: String,
    pub query: Option<String>,
}

impl ShowCommand {
    pub fn execute(self, app: &App) -> CliResult<()> {
        let item = app.items.get(&self.id)?;
        let query = self.query.as_deref().unwrap_or_default();
        let style = output_style(app.config.highlight);

        println!("{}", render::render_card(&item, query, style, usize::MAX));
        println!(
            "  created {}, updated {}",
            item.created_at().format("%Y-%m-%d %H:%M"),
            item.updated_at().format("%Y-%m-%d %H:%M")
        );

        let Item::Note(note) = &item else {
            return Ok(());
        };

        let links = html::linked_note_ids(&note.content);
        if links.is_empty() {
            return Ok(());
        }

        println!("\nLinked notes:");
        for id in links {
            match app.items.get(&id) {
                Ok(linked) => println!("  -> {} ({id})", linked.title()),
                Err(AppError::NotFound(_)) => println!("  -> {id} (missing)"),
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DeleteCommand {
    pub ids: Vec<String>,
    pub yes: bool,
}

impl DeleteCommand {
    pub fn execute(self, app: &App) -> CliResult<()> {
        let prompt = format!("Are you sure you want to delete {} items?", self.ids.len());
        if !confirm(self.yes, &prompt)? {
            return Ok(());
        }

        let count = app.items.delete(&self.ids)?;
        println!("{} items removed", count);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct TagCommand {
    pub ids: Vec<String>,
    pub tags: Vec<String>,
}

impl TagCommand {
    pub fn new(ids: Vec<String>, tags: String) -> CliResult<Self> {
        validate_tags(&tags)?;
        let tags = parse_tags(&tags);
        if tags.is_empty() {
            return Err(CliError::validation("tags", "No tags given"));
        }

        Ok(Self { ids, tags })
    }

    pub fn execute(self, app: &App) -> CliResult<()> {
        let count = app.items.add_tags(&self.ids, &self.tags)?;
        println!("{} items updated", count);
        Ok(())
    }
}

/// Appends a link to `target` at the end of `note`'s content.
#[derive(Debug, Clone)]
pub struct LinkCommand {
    pub note: String,
    pub target: String,
}

impl LinkCommand {
    pub fn new(note: String, target: String) -> CliResult<Self> {
        if note == target {
            return Err(CliError::validation("target", "A note cannot link to itself"));
        }
        Ok(Self { note, target })
    }

    pub fn execute(self, app: &App) -> CliResult<()> {
        let Item::Note(note) = app.items.get(&self.note)? else {
            return Err(CliError::validation("note", "Only notes can hold links"));
        };
        let Item::Note(target) = app.items.get(&self.target)? else {
            return Err(CliError::validation("target", "Only notes can be linked"));
        };

        let content = format!("{}{}", note.content, html::note_link(&target.id, &target.title));
        let update = ItemUpdate {
            content: Some(content),
            ..Default::default()
        };
        app.items.update(&note.id, update)?;

        println!("Linked \"{}\" -> \"{}\"", note.title, target.title);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ExportCommand {
    pub output: Option<PathBuf>,
}

impl ExportCommand {
    pub fn execute(self, app: &App) -> CliResult<()> {
        let items = app.items.list();
        let target = ExportTarget::resolve(self.output);
        backup::export_items(&items, &target)?;

        if let ExportTarget::File(path) = target {
            println!("{} items exported to {}", items.len(), path.display());
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ImportCommand {
    pub file: PathBuf,
    pub yes: bool,
}

impl ImportCommand {
    pub fn execute(self, app: &App) -> CliResult<()> {
        let items = backup::read_import(&self.file)?;

        let prompt = format!(
            "Import {} items? Items with the same id will be overwritten.",
            items.len()
        );
        if !confirm(self.yes, &prompt)? {
            return Ok(());
        }

        let count = app.items.merge(items)?;
        println!("{} items imported", count);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DemoCommand {
    pub yes: bool,
}

impl DemoCommand {
    pub fn execute(self, app: &App) -> CliResult<()> {
        let items = demo::demo_items();

        let prompt = format!(
            "Load {} demo items? Previously loaded demo items will be overwritten.",
            items.len()
        );
        if !confirm(self.yes, &prompt)? {
            return Ok(());
        }

        let count = app.items.merge(items)?;
        println!("{} demo items loaded", count);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct WipeCommand {
    pub yes: bool,
}

impl WipeCommand {
    pub fn execute(self, app: &App) -> CliResult<()> {
        let count = app.items.list().len();

        let prompt = format!(
            "You are about to wipe your entire database ({count} items). Are you really sure?"
        );
        if !confirm(self.yes, &prompt)? {
            return Ok(());
        }

        app.items.wipe()?;
        println!("{} items removed", count);
        Ok(())
    }
}

/// Shows the match decision and highlighting for arbitrary text.
#[derive(Debug, Clone)]
pub struct ProbeCommand {
    pub query: String,
    pub text: String,
    pub tag: bool,
}

impl ProbeCommand {
    pub fn execute(self, app: &App) -> CliResult<()> {
        let style = output_style(app.config.highlight);

        let spans = if self.tag {
            let label = if self.text.starts_with('#') {
                self.text.clone()
            } else {
                format!("#{}", self.text)
            };
            render::render_spans(&search::annotate_tag(&label, &self.query), style)
        } else {
            render::render_spans(&search::annotate(&self.text, &self.query), style)
        };

        println!("match: {}", search::matches(&self.query, &self.text));
        println!("{}", spans);
        Ok(())
    }
}
