use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::DuplicatePolicy;

pub const CONFIG_FILE_NAME: &str = ".acslangrc.json";

/// Families treated as the Asian-language focus subset.
pub const DEFAULT_FOCUS_FAMILIES: &[&str] = &[
    "Mongolic",
    "Austroasiatic",
    "Sino-Tibetan",
    "Kra-Dai+As. isolates",
    "Indo-Iranian",
    "Dravidian",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Family-range table (`min, max, name` per line).
    #[serde(default = "default_family_table")]
    pub family_table: String,
    /// Code-to-label table (`id,label` per line).
    #[serde(default = "default_language_key")]
    pub language_key: String,
    /// ACS housing-unit CSV file.
    #[serde(default = "default_household")]
    pub household: String,
    /// ACS person CSV file.
    #[serde(default = "default_person")]
    pub person: String,
    #[serde(default)]
    pub duplicate_families: DuplicatePolicy,
    #[serde(default = "default_focus_families")]
    pub focus_families: Vec<String>,
}

fn default_family_table() -> String {
    "shortened_fam_labels.txt".to_string()
}

fn default_language_key() -> String {
    "language_recode.txt".to_string()
}

fn default_household() -> String {
    "psam_h53.csv".to_string()
}

fn default_person() -> String {
    "psam_p53.csv".to_string()
}

fn default_focus_families() -> Vec<String> {
    DEFAULT_FOCUS_FAMILIES
        .iter()
        .map(|name| name.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            family_table: default_family_table(),
            language_key: default_language_key(),
            household: default_household(),
            person: default_person(),
            duplicate_families: DuplicatePolicy::default(),
            focus_families: default_focus_families(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Every file path must be non-empty.
    pub fn validate(&self) -> Result<()> {
        let paths = [
            ("familyTable", &self.family_table),
            ("languageKey", &self.language_key),
            ("household", &self.household),
            ("person", &self.person),
        ];
        for (field, value) in paths {
            if value.trim().is_empty() {
                bail!("'{}' must not be empty", field);
            }
        }

        if self.focus_families.iter().any(|name| name.trim().is_empty()) {
            bail!("'focusFamilies' must not contain empty names");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory holding the config file; relative paths in it resolve from here.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
