use std::{cmp::Ordering, collections::BTreeSet};

use clap::ValueEnum;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    items::{Item, ItemKind},
    search,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    All,
    Bookmarks,
    Notes,
}

impl View {
    fn admits(self, kind: ItemKind) -> bool {
        match self {
            View::All => true,
            View::Bookmarks => kind == ItemKind::Bookmark,
            View::Notes => kind == ItemKind::Note,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Title,
    #[value(name = "created")]
    CreatedAt,
    #[default]
    #[value(name = "updated")]
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    pub view: View,
    /// Exact tag the item must carry.
    pub tag: Option<String>,
    /// Free-text fuzzy search.
    pub search: Option<String>,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub limit: Option<usize>,
}

impl ItemQuery {
    /// Search text if it is not blank.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// True if `item` is a search hit for `term`: a tag contains it, or the
/// title or body fuzzy-matches it.
pub fn item_matches(item: &Item, term: &str) -> bool {
    let lower = term.to_lowercase();
    if item.tags().iter().any(|t| t.to_lowercase().contains(&lower)) {
        return true;
    }

    search::matches(term, item.title()) || search::matches_opt(term, item.body_text().as_deref())
}

/// Applies view, tag and search filters, then sorts. Collection order is the
/// tie breaker.
pub fn filter_items(items: &[Item], query: &ItemQuery) -> Vec<Item> {
    let search_term = query.search_term();

    let mut output: Vec<Item> = items
        .par_iter()
        .filter(|item| query.view.admits(item.kind()))
        .filter(|item| match &query.tag {
            Some(tag) => item.tags().iter().any(|t| t == tag),
            None => true,
        })
        .filter(|item| search_term.map_or(true, |term| item_matches(item, term)))
        .cloned()
        .collect();

    sort_items(&mut output, query.sort_key, query.sort_order);

    if let Some(limit) = query.limit {
        output.truncate(limit);
    }

    tracing::debug!(matched = output.len(), total = items.len(), "filtered items");

    output
}

pub fn sort_items(items: &mut [Item], key: SortKey, order: SortOrder) {
    items.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}

fn compare(a: &Item, b: &Item, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => a.title().to_lowercase().cmp(&b.title().to_lowercase()),
        SortKey::CreatedAt => a.created_at().cmp(&b.created_at()),
        SortKey::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
    }
}

/// Every tag in use, sorted and deduplicated.
pub fn all_tags(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .flat_map(|i| i.tags().iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
