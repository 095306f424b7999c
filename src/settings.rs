//! Flat key-value settings persisted as a JSON document.
//!
//! The document is loaded once and handed to whatever needs it. Every `set`
//! rewrites the whole file immediately.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Result, SettingsError};
use crate::math::LinearUnit;

/// Default file name of the settings document.
pub const SETTINGS_FILE_NAME: &str = ".uvlayout";

/// Gap used by even spacing when none is given.
pub const CURRENT_ALIGN_SPACE_VALUE: &str = "CURRENT_ALIGN_SPACE_VALUE";

/// Display unit for world lengths in texel density measurement.
pub const LINEAR_UNIT: &str = "LINEAR_UNIT";

/// A loaded settings document bound to its file.
#[derive(Debug, Clone)]
pub struct Settings {
    path: PathBuf,
    values: Map<String, Value>,
}

impl Settings {
    /// Loads the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or its
    /// root is not an object.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path).map_err(SettingsError::from)?;
        let values = match serde_json::from_str(&text).map_err(SettingsError::from)? {
            Value::Object(values) => values,
            _ => return Err(SettingsError::NotAnObject.into()),
        };
        tracing::debug!(path = %path.display(), keys = values.len(), "loaded settings");
        Ok(Self { path, values })
    }

    /// Loads the document at `path`, creating an empty one if the file does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file is unreadable or malformed, or a
    /// new file cannot be written.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }
        let settings = Self {
            path: path.to_path_buf(),
            values: Map::new(),
        };
        settings.dump()?;
        Ok(settings)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Stores `value` under `key` and writes the document to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        self.values.insert(key.into(), value.into());
        self.dump()
    }

    /// Writes the whole document, pretty printed with sorted keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    pub fn dump(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.values).map_err(SettingsError::from)?;
        fs::write(&self.path, text).map_err(SettingsError::from)?;
        Ok(())
    }

    /// Number stored under `key`, or `default` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::TypeMismatch` if the value is not a number.
    pub fn f64_or(&self, key: &str, default: f64) -> Result<f64> {
        match self.values.get(key) {
            None => Ok(default),
            Some(value) => value.as_f64().ok_or_else(|| {
                SettingsError::TypeMismatch {
                    key: key.to_owned(),
                    expected: "number",
                }
                .into()
            }),
        }
    }

    /// Default gap for even spacing. `0.0` when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value is not a number.
    pub fn align_space(&self) -> Result<f64> {
        self.f64_or(CURRENT_ALIGN_SPACE_VALUE, 0.0)
    }

    /// Stores the default gap for even spacing.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    pub fn set_align_space(&mut self, gap: f64) -> Result<()> {
        self.set(CURRENT_ALIGN_SPACE_VALUE, gap)
    }

    /// Display unit for texel density. Centimetres when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value is not a known unit name.
    pub fn linear_unit(&self) -> Result<LinearUnit> {
        match self.values.get(LINEAR_UNIT) {
            None => Ok(LinearUnit::default()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|_| {
                SettingsError::TypeMismatch {
                    key: LINEAR_UNIT.to_owned(),
                    expected: "linear unit name",
                }
                .into()
            }),
        }
    }
}
