use crate::{
    filter::{SortKey, SortOrder, View},
    render::HighlightStyle,
    storage::{self, StorageManager},
};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.yaml";

/// Default number of body characters shown per search result
const BODY_PREVIEW_CHARS: usize = 200;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_view: View,
    #[serde(default)]
    pub default_sort_key: SortKey,
    #[serde(default)]
    pub default_sort_order: SortOrder,

    /// How matched words are marked in text output
    #[serde(default)]
    pub highlight: HighlightStyle,

    #[serde(default = "body_preview_chars")]
    pub body_preview_chars: usize,

    #[serde(skip_serializing, skip_deserializing)]
    base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_view: View::default(),
            default_sort_key: SortKey::default(),
            default_sort_order: SortOrder::default(),
            highlight: HighlightStyle::default(),
            body_preview_chars: BODY_PREVIEW_CHARS,
            base_path: String::new(),
        }
    }
}

fn body_preview_chars() -> usize {
    BODY_PREVIEW_CHARS
}

impl Config {
    fn validate(&self) -> anyhow::Result<()> {
        if self.body_preview_chars == 0 {
            bail!("body_preview_chars must be greater than 0");
        }

        Ok(())
    }

    pub fn load_with(base_path: &str) -> anyhow::Result<Self> {
        let store = storage::BackendLocal::new(base_path)
            .with_context(|| format!("failed to create {base_path}"))?;

        // create new if does not exist
        if !store.exists(CONFIG_FILE) {
            log::info!("Writing default config to {base_path}/{CONFIG_FILE}");
            store.write(CONFIG_FILE, serde_yml::to_string(&Self::default())?.as_bytes())?;
        }

        let config_str =
            String::from_utf8(store.read(CONFIG_FILE)?).context("config file is not valid utf8")?;
        let mut config: Self = serde_yml::from_str(&config_str).context("config is malformed")?;

        config.base_path = base_path.to_string();

        config.validate()?;

        // resave in case config version needs an upgrade
        if config_str != serde_yml::to_string(&config)? {
            config.save()?;
        }

        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let store = storage::BackendLocal::new(&self.base_path)?;

        let config_str = serde_yml::to_string(&self)?;
        store.write(CONFIG_FILE, config_str.as_bytes())?;
        Ok(())
    }
}
