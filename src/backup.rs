use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use chrono::Local;
use serde_json::Value;

use crate::errors::{AppError, AppResult};
use crate::items::Item;

/// Write target for an export: either a file path or stdout (when piped).
pub enum ExportTarget {
    File(PathBuf),
    Stdout,
}

impl ExportTarget {
    /// Explicit path wins; otherwise stdout when piped, else a dated file in
    /// the current directory.
    pub fn resolve(output_path: Option<PathBuf>) -> Self {
        match output_path {
            Some(p) => ExportTarget::File(p),
            None if !io::stdout().is_terminal() => ExportTarget::Stdout,
            None => ExportTarget::File(PathBuf::from(default_export_name())),
        }
    }
}

pub fn default_export_name() -> String {
    let date = Local::now().format("%Y-%m-%d");
    format!("nexus-notes-backup-{date}.json")
}

/// Writes every item as a pretty-printed JSON array.
pub fn export_to<W: Write>(items: &[Item], mut writer: W) -> AppResult<()> {
    if items.is_empty() {
        return Err(AppError::NothingToExport);
    }
    serde_json::to_writer_pretty(&mut writer, items)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn export_items(items: &[Item], target: &ExportTarget) -> AppResult<()> {
    match target {
        ExportTarget::File(path) => {
            let file = File::create(path)?;
            export_to(items, file)?;
            log::info!("exported {} items to {}", items.len(), path.display());
        }
        ExportTarget::Stdout => export_to(items, io::stdout().lock())?,
    }
    Ok(())
}

/// Parses an export file. The whole import is rejected if any entry lacks an
/// id, title or type, so a bad file never half-applies.
pub fn parse_import(text: &str) -> AppResult<Vec<Item>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| AppError::InvalidImport(format!("not valid JSON: {e}")))?;

    let Value::Array(entries) = value else {
        return Err(AppError::InvalidImport(
            "expected a JSON array of items".into(),
        ));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            for field in ["id", "title", "type"] {
                let present = entry
                    .get(field)
                    .and_then(Value::as_str)
                    .is_some_and(|s| !s.is_empty());
                if !present {
                    return Err(AppError::InvalidImport(format!(
                        "entry #{} is missing required field '{field}'",
                        idx + 1
                    )));
                }
            }

            serde_json::from_value::<Item>(entry)
                .map_err(|e| AppError::InvalidImport(format!("entry #{}: {e}", idx + 1)))
        })
        .collect()
}

pub fn read_import(path: &PathBuf) -> AppResult<Vec<Item>> {
    let text = std::fs::read_to_string(path)?;
    parse_import(&text)
}
