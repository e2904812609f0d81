use crate::demo::demo_items;
use crate::filter::{all_tags, filter_items, item_matches, ItemQuery, SortKey, SortOrder, View};
use crate::items::{Item, ItemKind};

fn ids(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.id().as_str()).collect()
}

fn search(term: &str) -> ItemQuery {
    ItemQuery {
        search: Some(term.into()),
        ..Default::default()
    }
}

#[test]
fn default_query_returns_everything_by_updated_desc() {
    let items = filter_items(&demo_items(), &ItemQuery::default());
    assert_eq!(
        ids(&items),
        vec![
            "demo-note-1",
            "demo-bookmark-1",
            "demo-note-2",
            "demo-bookmark-2",
            "demo-bookmark-3"
        ]
    );
}

#[test]
fn blank_search_is_ignored() {
    let items = filter_items(&demo_items(), &search("   "));
    assert_eq!(items.len(), 5);
}

#[test]
fn view_restricts_kind() {
    let query = ItemQuery {
        view: View::Notes,
        ..Default::default()
    };
    let notes = filter_items(&demo_items(), &query);
    assert_eq!(notes.len(), 2);
    assert!(notes.iter().all(|i| i.kind() == ItemKind::Note));

    let query = ItemQuery {
        view: View::Bookmarks,
        ..Default::default()
    };
    let bookmarks = filter_items(&demo_items(), &query);
    assert_eq!(bookmarks.len(), 3);
    assert!(bookmarks.iter().all(|i| i.kind() == ItemKind::Bookmark));
}

#[test]
fn tag_filter_is_exact() {
    let query = ItemQuery {
        tag: Some("frontend".into()),
        sort_key: SortKey::Title,
        sort_order: SortOrder::Asc,
        ..Default::default()
    };
    let items = filter_items(&demo_items(), &query);
    assert_eq!(ids(&items), vec!["demo-bookmark-1", "demo-bookmark-2"]);

    let query = ItemQuery {
        tag: Some("Frontend".into()),
        ..Default::default()
    };
    assert!(filter_items(&demo_items(), &query).is_empty());

    let query = ItemQuery {
        tag: Some("front".into()),
        ..Default::default()
    };
    assert!(filter_items(&demo_items(), &query).is_empty());
}

#[test]
fn search_hits_tag_substrings() {
    let items = demo_items();
    assert!(item_matches(&items[0], "front"));
    assert!(item_matches(&items[0], "FRONT"));

    let query = ItemQuery {
        sort_key: SortKey::Title,
        sort_order: SortOrder::Asc,
        ..search("javascript")
    };
    let found = filter_items(&items, &query);
    assert_eq!(ids(&found), vec!["demo-bookmark-3", "demo-bookmark-1"]);
}

#[test]
fn search_tolerates_typos_in_titles() {
    let found = filter_items(&demo_items(), &search("Reakt"));
    assert_eq!(ids(&found), vec!["demo-bookmark-1"]);
}

#[test]
fn search_reads_note_text_not_markup() {
    let found = filter_items(&demo_items(), &search("typo tolerance"));
    assert_eq!(ids(&found), vec!["demo-note-1"]);

    assert!(filter_items(&demo_items(), &search("blockquote")).is_empty());
}

#[test]
fn search_combines_with_view() {
    let query = ItemQuery {
        view: View::Bookmarks,
        ..search("editor")
    };
    let found = filter_items(&demo_items(), &query);
    assert_eq!(ids(&found), vec!["demo-bookmark-3"]);
}

#[test]
fn sort_and_limit() {
    let query = ItemQuery {
        sort_key: SortKey::Title,
        sort_order: SortOrder::Asc,
        ..Default::default()
    };
    assert_eq!(
        ids(&filter_items(&demo_items(), &query)),
        vec![
            "demo-note-1",
            "demo-bookmark-3",
            "demo-bookmark-1",
            "demo-bookmark-2",
            "demo-note-2"
        ]
    );

    let query = ItemQuery {
        sort_key: SortKey::CreatedAt,
        sort_order: SortOrder::Asc,
        limit: Some(2),
        ..Default::default()
    };
    assert_eq!(
        ids(&filter_items(&demo_items(), &query)),
        vec!["demo-note-2", "demo-bookmark-3"]
    );
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let mut items = demo_items();
    let Item::Bookmark(first) = items[0].clone() else {
        panic!("expected bookmark");
    };
    let mut twin = first.clone();
    twin.id = "twin".into();
    items.push(Item::Bookmark(twin));

    let query = ItemQuery {
        sort_key: SortKey::CreatedAt,
        ..Default::default()
    };
    let sorted = filter_items(&items, &query);
    assert_eq!(ids(&sorted)[..2], ["demo-bookmark-1", "twin"]);
}

#[test]
fn all_tags_sorted_and_unique() {
    let tags = all_tags(&demo_items());
    assert!(tags.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(tags.iter().filter(|t| *t == "frontend").count(), 1);
    assert!(tags.contains(&"rich-text".to_string()));
    assert!(all_tags(&[]).is_empty());
}
