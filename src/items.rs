use crate::{
    eid::Eid,
    errors::{AppError, AppResult},
    html,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
    io::ErrorKind,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
    time::Instant,
};

/// What the rich-text editor leaves behind when a note is cleared.
const EMPTY_EDITOR_CONTENT: &str = "<p><br></p>";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Bookmark,
    Note,
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Bookmark => write!(f, "bookmark"),
            ItemKind::Note => write!(f, "note"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: Eid,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "chrono::Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "chrono::Utc::now")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon_data_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Eid,
    pub title: String,
    /// Rich-text HTML.
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "chrono::Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "chrono::Utc::now")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    Bookmark(Bookmark),
    Note(Note),
}

impl Item {
    pub fn id(&self) -> &Eid {
        match self {
            Item::Bookmark(b) => &b.id,
            Item::Note(n) => &n.id,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Bookmark(_) => ItemKind::Bookmark,
            Item::Note(_) => ItemKind::Note,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Item::Bookmark(b) => &b.title,
            Item::Note(n) => &n.title,
        }
    }

    pub fn tags(&self) -> &[String] {
        match self {
            Item::Bookmark(b) => &b.tags,
            Item::Note(n) => &n.tags,
        }
    }

    fn tags_mut(&mut self) -> &mut Vec<String> {
        match self {
            Item::Bookmark(b) => &mut b.tags,
            Item::Note(n) => &mut n.tags,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Item::Bookmark(b) => b.created_at,
            Item::Note(n) => n.created_at,
        }
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        match self {
            Item::Bookmark(b) => b.updated_at,
            Item::Note(n) => n.updated_at,
        }
    }

    fn touch(&mut self) {
        let now = Utc::now();
        match self {
            Item::Bookmark(b) => b.updated_at = now,
            Item::Note(n) => n.updated_at = now,
        }
    }

    /// Searchable plain-text body: the bookmark description, or the note
    /// content with markup removed.
    pub fn body_text(&self) -> Option<String> {
        match self {
            Item::Bookmark(b) => b.description.clone(),
            Item::Note(n) => Some(html::strip_html(&n.content)),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.id().trim().is_empty() {
            return Err(AppError::InvalidItem("id cannot be empty".into()));
        }
        if self.title().trim().is_empty() {
            return Err(AppError::InvalidItem(format!(
                "{}: title cannot be empty",
                self.id()
            )));
        }
        match self {
            Item::Bookmark(b) if b.url.trim().is_empty() => Err(AppError::InvalidItem(format!(
                "{}: bookmark url cannot be empty",
                b.id
            ))),
            Item::Note(n) if is_blank_content(&n.content) => Err(AppError::InvalidItem(format!(
                "{}: note content cannot be empty",
                n.id
            ))),
            _ => Ok(()),
        }
    }
}

fn is_blank_content(content: &str) -> bool {
    content.trim().is_empty() || content == EMPTY_EDITOR_CONTENT
}

/// Splits a comma separated tag list, trimming and dropping empties and
/// duplicates. Tags may contain spaces.
pub fn parse_tags(tags: &str) -> Vec<String> {
    let mut tags = tags
        .split(',')
        .map(|value| value.trim().to_string())
        .collect::<Vec<_>>();
    dedup_tags(&mut tags);
    tags
}

fn dedup_tags(tags: &mut Vec<String>) {
    let mut seen = HashSet::new();
    tags.retain(|item| !item.is_empty() && seen.insert(item.clone()));
}

#[derive(Debug, Clone, Default)]
pub struct ItemCreate {
    pub kind: ItemKind,
    pub title: String,
    pub tags: Option<Vec<String>>,

    pub url: Option<String>,
    pub description: Option<String>,

    pub content: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ItemUpdate {
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,

    pub url: Option<String>,
    pub description: Option<String>,

    pub content: Option<String>,
}

impl ItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.tags.is_none()
            && self.url.is_none()
            && self.description.is_none()
            && self.content.is_none()
    }

    fn apply(self, item: &mut Item) -> AppResult<()> {
        let id = item.id().to_string();
        let mismatch = |actual: ItemKind, field: &'static str| AppError::KindMismatch {
            id: id.clone(),
            actual,
            field,
        };

        match item {
            Item::Bookmark(b) => {
                if self.content.is_some() {
                    return Err(mismatch(ItemKind::Bookmark, "content"));
                }
                if let Some(url) = self.url {
                    b.url = url;
                }
                if let Some(description) = self.description {
                    b.description = if description.is_empty() {
                        None
                    } else {
                        Some(description)
                    };
                }
            }
            Item::Note(n) => {
                if self.url.is_some() {
                    return Err(mismatch(ItemKind::Note, "url"));
                }
                if self.description.is_some() {
                    return Err(mismatch(ItemKind::Note, "description"));
                }
                if let Some(content) = self.content {
                    n.content = content;
                }
            }
        }

        if let Some(title) = self.title {
            match item {
                Item::Bookmark(b) => b.title = title,
                Item::Note(n) => n.title = title,
            }
        }

        if let Some(tags) = self.tags {
            *item.tags_mut() = tags;
            dedup_tags(item.tags_mut());
        }

        item.touch();
        Ok(())
    }
}

pub trait ItemManager: Send + Sync {
    /// All items, most recently created first.
    fn list(&self) -> Vec<Item>;
    fn get(&self, id: &str) -> AppResult<Item>;
    fn create(&self, item: ItemCreate) -> AppResult<Item>;
    fn update(&self, id: &str, update: ItemUpdate) -> AppResult<Item>;
    /// Removes every listed id that exists, returns how many were removed.
    fn delete(&self, ids: &[String]) -> AppResult<usize>;
    /// Adds `tags` to every listed item, returns how many items were touched.
    fn add_tags(&self, ids: &[String], tags: &[String]) -> AppResult<usize>;
    /// Inserts or overwrites by id. Existing items keep their position, new
    /// ones are appended in the given order.
    fn merge(&self, items: Vec<Item>) -> AppResult<usize>;
    fn wipe(&self) -> AppResult<()>;
}

/// Items persisted as a single JSON array.
#[derive(Debug, Clone, Default)]
pub struct BackendJson {
    list: Arc<RwLock<Vec<Item>>>,
    path: String,
}

impl BackendJson {
    pub fn load(path: &str) -> AppResult<Self> {
        if let Err(err) = std::fs::metadata(path) {
            match err.kind() {
                ErrorKind::NotFound => {
                    log::info!("Creating new database at {path}");
                    std::fs::write(path, "[]")?;
                }
                _ => Err(err)?,
            }
        }

        let now = Instant::now();
        let data = std::fs::read_to_string(path)?;
        let items: Vec<Item> = if data.trim().is_empty() {
            vec![]
        } else {
            serde_json::from_str(&data)?
        };

        log::debug!(
            "took {}ms to read {} items",
            now.elapsed().as_micros() as f64 / 1000.0,
            items.len()
        );

        Ok(BackendJson {
            list: Arc::new(RwLock::new(items)),
            path: path.to_string(),
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Item>> {
        self.list.read().expect("items lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Item>> {
        self.list.write().expect("items lock poisoned")
    }

    fn save(&self, items: &[Item]) -> AppResult<()> {
        let temp_path = format!("{}-tmp", &self.path);
        std::fs::write(&temp_path, serde_json::to_string(items)?)?;
        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Writes `next` to disk, then swaps it in. Memory is left untouched when
    /// the write fails.
    fn commit(&self, items: &mut RwLockWriteGuard<'_, Vec<Item>>, next: Vec<Item>) -> AppResult<()> {
        self.save(&next)?;
        **items = next;
        Ok(())
    }
}

impl ItemManager for BackendJson {
    fn list(&self) -> Vec<Item> {
        self.read().clone()
    }

    fn get(&self, id: &str) -> AppResult<Item> {
        self.read()
            .iter()
            .find(|i| i.id().as_str() == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    fn create(&self, create: ItemCreate) -> AppResult<Item> {
        let now = Utc::now();
        let mut tags = create.tags.unwrap_or_default();
        dedup_tags(&mut tags);

        let item = match create.kind {
            ItemKind::Bookmark => Item::Bookmark(Bookmark {
                id: Eid::new(),
                title: create.title,
                url: create.url.unwrap_or_default(),
                description: create.description.filter(|d| !d.is_empty()),
                tags,
                created_at: now,
                updated_at: now,
                favicon_data_url: None,
            }),
            ItemKind::Note => Item::Note(Note {
                id: Eid::new(),
                title: create.title,
                content: create.content.unwrap_or_default(),
                tags,
                created_at: now,
                updated_at: now,
            }),
        };
        item.validate()?;

        let mut items = self.write();
        let mut next = items.clone();
        next.insert(0, item.clone());
        self.commit(&mut items, next)?;

        Ok(item)
    }

    fn update(&self, id: &str, update: ItemUpdate) -> AppResult<Item> {
        let mut items = self.write();

        let idx = items
            .iter()
            .position(|i| i.id().as_str() == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        let mut updated = items[idx].clone();
        update.apply(&mut updated)?;
        updated.validate()?;

        let mut next = items.clone();
        next[idx] = updated.clone();
        self.commit(&mut items, next)?;

        Ok(updated)
    }

    fn delete(&self, ids: &[String]) -> AppResult<usize> {
        let mut items = self.write();
        let next: Vec<Item> = items
            .iter()
            .filter(|i| !ids.iter().any(|id| id == i.id().as_str()))
            .cloned()
            .collect();
        let count = items.len() - next.len();

        if count > 0 {
            self.commit(&mut items, next)?;
        }

        Ok(count)
    }

    fn add_tags(&self, ids: &[String], tags: &[String]) -> AppResult<usize> {
        if tags.is_empty() {
            return Ok(0);
        }

        let mut items = self.write();
        let mut next = items.clone();
        let mut count = 0;
        for item in next.iter_mut() {
            if !ids.iter().any(|id| id == item.id().as_str()) {
                continue;
            }
            item.tags_mut().extend(tags.iter().cloned());
            dedup_tags(item.tags_mut());
            item.touch();
            count += 1;
        }

        if count > 0 {
            self.commit(&mut items, next)?;
        }

        Ok(count)
    }

    fn merge(&self, incoming: Vec<Item>) -> AppResult<usize> {
        let mut items = self.write();
        let mut next = items.clone();
        let mut positions: HashMap<Eid, usize> = next
            .iter()
            .enumerate()
            .map(|(idx, i)| (i.id().clone(), idx))
            .collect();

        let count = incoming.len();
        for item in incoming {
            match positions.get(item.id()) {
                Some(&idx) => next[idx] = item,
                None => {
                    positions.insert(item.id().clone(), next.len());
                    next.push(item);
                }
            }
        }

        self.commit(&mut items, next)?;
        Ok(count)
    }

    fn wipe(&self) -> AppResult<()> {
        let mut items = self.write();
        self.commit(&mut items, vec![])
    }
}
