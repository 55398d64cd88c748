//! # Context Initialization
//!
//! Builds the [`TextoriumApi`] a front end works with: loads configuration,
//! settles on a data directory and opens the [`FileStore`] there.
//!
//! ## Data Directory Resolution
//!
//! 1. An explicit override (the CLI's `--data-dir`)
//! 2. `data_dir` from configuration, which includes `TEXTORIUM_DATA_DIR`
//! 3. The OS data directory for `textorium` (via the `directories` crate)

use std::path::PathBuf;

use tracing::debug;

use crate::api::TextoriumApi;
use crate::config::TextoriumConfig;
use crate::error::Result;
use crate::store::fs::FileStore;

pub struct TextoriumContext {
    pub api: TextoriumApi<FileStore>,
    pub data_dir: PathBuf,
}

/// Loads configuration from its usual places and opens the store.
pub fn initialize(data_override: Option<PathBuf>) -> Result<TextoriumContext> {
    let config = TextoriumConfig::load()?;
    initialize_with_config(config, data_override)
}

/// Opens the store for an already-loaded configuration.
pub fn initialize_with_config(
    mut config: TextoriumConfig,
    data_override: Option<PathBuf>,
) -> Result<TextoriumContext> {
    if let Some(dir) = data_override {
        config.data_dir = Some(dir);
    }
    let data_dir = config.resolve_data_dir()?;
    debug!(data_dir = %data_dir.display(), "opening snippet store");

    let store = FileStore::new(&data_dir);
    Ok(TextoriumContext {
        api: TextoriumApi::new(store, config),
        data_dir,
    })
}
