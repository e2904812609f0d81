use crate::app::{App, AppPaths};
use crate::demo::demo_items;
use crate::filter::{SortKey, View};

fn fresh_app() -> (App, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let base = tmp.path().join("data");
    let paths = AppPaths::from_base(base.to_str().unwrap());
    let app = App::open(&paths).unwrap();
    (app, tmp)
}

#[test]
fn open_creates_data_files() {
    let (app, tmp) = fresh_app();
    let base = tmp.path().join("data");

    assert!(base.join("items.json").is_file());
    assert!(base.join("config.yaml").is_file());
    assert!(app.items.list().is_empty());
}

#[test]
fn paths_from_base() {
    let paths = AppPaths::from_base("/tmp/nexus");
    assert_eq!(paths.items_path, "/tmp/nexus/items.json");
}

#[test]
fn default_query_follows_config() {
    let tmp = tempfile::tempdir().unwrap();
    let base = tmp.path().to_str().unwrap();
    std::fs::write(
        tmp.path().join("config.yaml"),
        "default_view: bookmarks\ndefault_sort_key: title\ndefault_sort_order: asc\n",
    )
    .unwrap();

    let app = App::open(&AppPaths::from_base(base)).unwrap();
    let query = app.default_query();
    assert_eq!(query.view, View::Bookmarks);
    assert_eq!(query.sort_key, SortKey::Title);

    app.items.merge(demo_items()).unwrap();
    let found = app.search(&query);
    assert_eq!(found.len(), 3);
    assert_eq!(found[0].id().as_str(), "demo-bookmark-3");
}

#[test]
fn items_survive_reopen() {
    let tmp = tempfile::tempdir().unwrap();
    let paths = AppPaths::from_base(tmp.path().to_str().unwrap());

    {
        let app = App::open(&paths).unwrap();
        app.items.merge(demo_items()).unwrap();
    }

    let app = App::open(&paths).unwrap();
    assert_eq!(app.items.list(), demo_items());
    assert!(app.all_tags().contains(&"goals".to_string()));
}
