//! Command line options shared by the vyn tools

use std::path::Path;

use anyhow::Result;
use clap::Args;
use vyn_config::config_store_write;
use vyn_config::storage::JsonStorageAdapter;

/// Location of the settings written by `config-store`
#[derive(Debug, Args)]
pub struct SettingsOpts {
    /// Json settings file, as written by config-store
    #[clap(short = 'p', long = "path", default_value = "settings.json")]
    pub path: String,
}

impl SettingsOpts {
    /// Loads the settings file into the global config store. A missing file leaves the built-in
    /// defaults in place and is not created. Returns true when the file was loaded.
    pub fn load(&self) -> Result<bool> {
        if !Path::new(&self.path).exists() {
            return Ok(false);
        }

        let storage = JsonStorageAdapter::try_from(self.path.as_str())?;
        config_store_write().set_storage(Box::new(storage));

        Ok(true)
    }
}
