use crate::items::ItemKind;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("item not found: {0}")]
    NotFound(String),

    #[error("item {id} is a {actual}, cannot set {field}")]
    KindMismatch {
        id: String,
        actual: ItemKind,
        field: &'static str,
    },

    #[error("invalid item: {0}")]
    InvalidItem(String),

    #[error("import failed: {0}")]
    InvalidImport(String),

    #[error("no data to export")]
    NothingToExport,

    #[error("io error: {0:?}")]
    IO(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
