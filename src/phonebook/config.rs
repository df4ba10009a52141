use crate::error::{PhonebookError, Result};
use crate::model::SortField;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTACTS_FILE: &str = "contacts.json";
pub const LOG_FILENAME: &str = "phonebook.log";

/// Keys accepted by `get`/`set`.
pub const CONFIG_KEYS: [&str; 3] = ["contacts-file", "default-sort", "log-to-file"];

/// Configuration for phonebook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Contacts file name, relative to the data directory unless absolute
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,

    /// Ordering used by `list` when no sort field is given
    #[serde(default)]
    pub default_sort: SortField,

    /// Send logs to `phonebook.log` in the data directory instead of stderr
    #[serde(default)]
    pub log_to_file: bool,
}

fn default_contacts_file() -> String {
    DEFAULT_CONTACTS_FILE.to_string()
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
            default_sort: SortField::default(),
            log_to_file: false,
        }
    }
}

impl PhonebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PhonebookError::Io)?;
        let config: PhonebookConfig =
            serde_json::from_str(&content).map_err(|e| PhonebookError::Deserialization {
                location: config_path.display().to_string(),
                reason: e.to_string(),
            })?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PhonebookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PhonebookError::Serialization)?;
        fs::write(config_path, content).map_err(PhonebookError::Io)?;
        Ok(())
    }

    /// Where the contacts file lives for a given data directory.
    pub fn contacts_path(&self, data_dir: &Path) -> PathBuf {
        let file = Path::new(&self.contacts_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.join(file)
        }
    }

    pub fn log_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(LOG_FILENAME)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "contacts-file" => Ok(self.contacts_file.clone()),
            "default-sort" => Ok(self.default_sort.to_string()),
            "log-to-file" => Ok(self.log_to_file.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "contacts-file" => {
                if value.trim().is_empty() {
                    return Err(PhonebookError::Config(
                        "contacts-file cannot be empty".to_string(),
                    ));
                }
                self.contacts_file = value.to_string();
            }
            "default-sort" => {
                self.default_sort = value.parse().map_err(PhonebookError::Config)?;
            }
            "log-to-file" => {
                self.log_to_file = value.parse().map_err(|_| {
                    PhonebookError::Config(format!(
                        "log-to-file expects true or false, got {}",
                        value
                    ))
                })?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// Every key with its current value, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }
}

fn unknown_key(key: &str) -> PhonebookError {
    PhonebookError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
