use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// JSON configuration document addressed with dotted paths.
///
/// ```
/// # use engine::Config;
/// let mut config = Config::default();
/// config.set("display.fps_limit", 60).unwrap();
/// assert_eq!(config.get::<i32>("display.fps_limit"), Some(60));
/// assert!(config.has("display"));
/// assert!(!config.has("audio.music"));
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    data: Value,
    /// File the document was last loaded from or saved to.
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: Value::Object(Map::new()),
            path: None,
        }
    }
}

impl Config {
    /// Load a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut ret = Config::default();
        ret.load(path)?;
        Ok(ret)
    }

    /// Replace contents with the file at `path` and remember the path.
    ///
    /// The current contents are left untouched if loading fails.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to open config {path:?}"))?;
        self.data = serde_json::from_str(&text)
            .with_context(|| format!("Bad JSON in config {path:?}"))?;
        self.path = Some(path.to_owned());
        log::info!("Loaded configuration from {path:?}");
        Ok(())
    }

    /// Load again from the remembered path.
    pub fn reload(&mut self) -> Result<()> {
        let Some(path) = self.path.clone() else {
            bail!("Cannot reload config, no file previously loaded");
        };
        self.load(path)
    }

    /// Write to the remembered path.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            bail!("Cannot save config, no file path set");
        };
        self.write(path)
    }

    /// Write to `path` and remember it for later saves and reloads.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.write(path)?;
        self.path = Some(path.to_owned());
        Ok(())
    }

    fn write(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty())
        {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {dir:?}"))?;
        }
        let text = serde_json::to_string_pretty(&self.data)?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write config {path:?}"))?;
        log::info!("Saved configuration to {path:?}");
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Deserialize the value at `key`.
    ///
    /// Returns `None` if the value is missing or has the wrong shape.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.lookup(key)?;
        match T::deserialize(value) {
            Ok(ret) => Some(ret),
            Err(e) => {
                log::warn!("Config value {key:?} has unexpected type: {e}");
                None
            }
        }
    }

    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Set the value at `key`, creating intermediate objects as needed.
    ///
    /// Intermediate values that aren't objects get replaced.
    pub fn set(&mut self, key: &str, value: impl Serialize) -> Result<()> {
        let value = serde_json::to_value(value)?;
        let parts: Vec<&str> = key.split('.').collect();
        let Some((last, init)) = parts.split_last() else {
            bail!("Empty config key");
        };
        if parts.iter().any(|p| p.is_empty()) {
            bail!("Bad config key {key:?}");
        }

        let mut current = &mut self.data;
        for part in init {
            current = object(current)
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
        }
        object(current).insert(last.to_string(), value);
        Ok(())
    }

    /// Whether a non-null value exists at `key`.
    pub fn has(&self, key: &str) -> bool {
        self.lookup(key).is_some_and(|v| !v.is_null())
    }

    /// Remove the value at `key`, return whether there was one.
    pub fn remove(&mut self, key: &str) -> bool {
        let (parent, last) = match key.rsplit_once('.') {
            Some((parent, last)) => (self.lookup_mut(parent), last),
            None => (Some(&mut self.data), key),
        };
        parent
            .and_then(Value::as_object_mut)
            .and_then(|obj| obj.remove(last))
            .is_some()
    }

    pub fn clear(&mut self) {
        self.data = Value::Object(Map::new());
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        if key.is_empty() {
            return Some(&self.data);
        }
        key.split('.').try_fold(&self.data, |v, part| v.get(part))
    }

    fn lookup_mut(&mut self, key: &str) -> Option<&mut Value> {
        key.split('.')
            .try_fold(&mut self.data, |v, part| v.get_mut(part))
    }
}

/// View value as an object, replacing it with an empty one if it's something
/// else.
fn object(value: &mut Value) -> &mut Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => {
            *other = Value::Object(Map::new());
            object(other)
        }
    }
}
