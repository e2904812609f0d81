use std::sync::Arc;

use anyhow::{Context, Result};
use homedir::my_home;

use crate::{
    config::Config,
    filter::{self, ItemQuery},
    items::{BackendJson, Item, ItemManager},
};

/// Where everything lives on disk.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub base_path: String,
    pub items_path: String,
}

impl AppPaths {
    /// `$NEXUS_BASE_PATH`, or `~/.local/share/nexus`.
    pub fn resolve() -> Result<Self> {
        let base_path = match std::env::var("NEXUS_BASE_PATH") {
            Ok(path) => path,
            Err(_) => {
                let home = my_home()
                    .context("could not determine home directory")?
                    .context("home directory path is empty")?;
                format!("{}/.local/share/nexus", home.to_string_lossy())
            }
        };

        Ok(Self::from_base(&base_path))
    }

    pub fn from_base(base_path: &str) -> Self {
        Self {
            base_path: base_path.to_string(),
            items_path: format!("{base_path}/items.json"),
        }
    }
}

pub struct App {
    pub items: Arc<dyn ItemManager>,
    pub config: Config,
}

impl App {
    pub fn open(paths: &AppPaths) -> Result<Self> {
        std::fs::create_dir_all(&paths.base_path)
            .context("failed to create application base directory")?;

        let config = Config::load_with(&paths.base_path)?;
        let items = BackendJson::load(&paths.items_path)
            .with_context(|| format!("failed to load {}", paths.items_path))?;

        Ok(Self {
            items: Arc::new(items),
            config,
        })
    }

    /// Query prefilled with the configured view and sort.
    pub fn default_query(&self) -> ItemQuery {
        ItemQuery {
            view: self.config.default_view,
            sort_key: self.config.default_sort_key,
            sort_order: self.config.default_sort_order,
            ..Default::default()
        }
    }

    pub fn search(&self, query: &ItemQuery) -> Vec<Item> {
        filter::filter_items(&self.items.list(), query)
    }

    pub fn all_tags(&self) -> Vec<String> {
        filter::all_tags(&self.items.list())
    }
}
