use crate::errors::Error;
use crate::settings::Setting;
use crate::StorageAdapter;
use log::warn;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use vyn_shared::types::Result;

/// Stores settings as a flat json object of `"key": "t:value"` pairs
pub struct JsonStorageAdapter {
    path: PathBuf,
    elements: Mutex<HashMap<String, Setting>>,
}

impl TryFrom<&str> for JsonStorageAdapter {
    type Error = anyhow::Error;

    /// Opens the json file at the given path, creating an empty one when it does not exist yet
    fn try_from(path: &str) -> Result<Self> {
        let path = Path::new(path);

        match fs::metadata(path) {
            Ok(metadata) if !metadata.is_file() => {
                return Err(Error::Config(format!("{} is not a regular file", path.display())).into());
            }
            Ok(_) => {}
            Err(_) => fs::write(path, "{}").map_err(Error::IO)?,
        }

        let adapter = Self {
            path: path.to_path_buf(),
            elements: Mutex::new(HashMap::new()),
        };
        adapter.read_file()?;

        Ok(adapter)
    }
}

impl StorageAdapter for JsonStorageAdapter {
    fn get(&self, key: &str) -> Option<Setting> {
        self.elements.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: Setting) {
        self.elements.lock().insert(key.to_owned(), value);

        if let Err(err) = self.write_file() {
            warn!("config: cannot write {}: {err}", self.path.display());
        }
    }

    fn all(&self) -> Result<HashMap<String, Setting>> {
        Ok(self.elements.lock().clone())
    }
}

impl JsonStorageAdapter {
    /// Reads the whole json file into `self.elements`. Entries that cannot be parsed are skipped.
    fn read_file(&self) -> Result<()> {
        let buf = fs::read_to_string(&self.path).map_err(Error::IO)?;
        let parsed_json: Value = serde_json::from_str(&buf).map_err(Error::JsonSerde)?;

        let Value::Object(settings) = parsed_json else {
            return Err(Error::Config(format!("{} does not contain a json object", self.path.display())).into());
        };

        let mut elements = self.elements.lock();
        elements.clear();
        for (key, value) in settings {
            match serde_json::from_value(value) {
                Ok(setting) => {
                    elements.insert(key, setting);
                }
                Err(err) => {
                    warn!("config: problem reading setting {key} from json: {err}");
                }
            }
        }

        Ok(())
    }

    /// Writes all elements back to the file, sorted by key
    fn write_file(&self) -> Result<()> {
        let sorted: BTreeMap<String, Setting> = self
            .elements
            .lock()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let json = serde_json::to_string_pretty(&sorted).map_err(Error::JsonSerde)?;
        fs::write(&self.path, json).map_err(Error::IO)?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let adapter = JsonStorageAdapter::try_from(path.to_str().unwrap()).unwrap();
        assert!(adapter.all().unwrap().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn persists_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let path = path.to_str().unwrap();

        let adapter = JsonStorageAdapter::try_from(path).unwrap();
        adapter.set("stdlib.window.module", Setting::String("Gui".into()));
        adapter.set("log.debug", Setting::Bool(true));

        let reopened = JsonStorageAdapter::try_from(path).unwrap();
        assert_eq!(
            reopened.get("stdlib.window.module"),
            Some(Setting::String("Gui".into()))
        );
        assert_eq!(reopened.get("log.debug"), Some(Setting::Bool(true)));
    }

    #[test]
    fn skips_broken_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"log.debug": "b:true", "broken": "z:1"}"#).unwrap();

        let adapter = JsonStorageAdapter::try_from(path.to_str().unwrap()).unwrap();
        let all = adapter.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all.get("log.debug"), Some(&Setting::Bool(true)));
    }

    #[test]
    fn rejects_non_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(JsonStorageAdapter::try_from(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonStorageAdapter::try_from(dir.path().to_str().unwrap()).is_err());
    }
}
