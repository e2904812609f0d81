use anyhow::Result;

use crate::{
    app::App,
    cli::{
        commands::*,
        errors::CliResult,
        AddArgs, Command,
    },
    items::{ItemKind, ItemUpdate},
};

/// Turns parsed arguments into a command and runs it.
pub fn handle(command: Command, app: &App) -> Result<()> {
    dispatch(command, app).map_err(|e| anyhow::anyhow!(e))
}

fn dispatch(command: Command, app: &App) -> CliResult<()> {
    match command {
        Command::Add { item } => handle_add(item)?.execute(app),

        Command::Search {
            query,
            view,
            tag,
            sort,
            order,
            limit,
            count,
            format,
        } => {
            let params = SearchCommandParams {
                terms: query,
                view,
                tag,
                sort,
                order,
                limit,
                count,
                format,
            };
            SearchCommand::new(params, app.default_query())?.execute(app)
        }

        Command::Show { id, query } => ShowCommand { id, query }.execute(app),

        Command::Edit {
            id,
            title,
            url,
            description,
            content,
            tags,
            editor,
        } => {
            let update = ItemUpdate {
                title,
                url,
                description,
                content,
                tags: None,
            };
            EditCommand::new(id, update, tags, editor)?.execute(app)
        }

        Command::Delete { ids, yes } => DeleteCommand { ids, yes }.execute(app),

        Command::Tag { ids, tags } => TagCommand::new(ids, tags)?.execute(app),

        Command::Tags {} => {
            for tag in app.all_tags() {
                println!("{tag}");
            }
            Ok(())
        }

        Command::Link { note, target } => LinkCommand::new(note, target)?.execute(app),

        Command::Export { output } => ExportCommand { output }.execute(app),

        Command::Import { file, yes } => ImportCommand { file, yes }.execute(app),

        Command::Demo { yes } => DemoCommand { yes }.execute(app),

        Command::Wipe { yes } => WipeCommand { yes }.execute(app),

        Command::Probe { query, text, tag } => ProbeCommand { query, text, tag }.execute(app),
    }
}

fn handle_add(args: AddArgs) -> CliResult<AddCommand> {
    match args {
        AddArgs::Bookmark {
            url,
            title,
            description,
            tags,
            editor,
        } => AddCommand::new(ItemKind::Bookmark, title, url, description, tags, editor),
        AddArgs::Note {
            title,
            content,
            tags,
            editor,
        } => AddCommand::new(ItemKind::Note, title, None, content, tags, editor),
    }
}
