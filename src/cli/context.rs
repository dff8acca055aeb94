use std::{
    cell::OnceCell,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use tracing::debug;

use super::args::CommonArgs;
use crate::{
    config::{Config, load_config},
    core::{Dataset, FamilyGroup, LanguageKey, import_language_key, load_files, recode},
};

/// Resolved inputs for one CLI run.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--families tables/families.txt`)
/// 2. `.acslangrc.json` config file (paths relative to the file)
/// 3. Built-in defaults
///
/// The family table and language key are read at most once per run and
/// shared by every stage that needs them.
pub struct RunContext {
    pub config: Config,
    pub families_path: PathBuf,
    pub language_key_path: PathBuf,
    pub household_path: PathBuf,
    pub person_path: PathBuf,
    pub verbose: bool,

    families: OnceCell<FamilyGroup>,
    language_key: OnceCell<LanguageKey>,
}

impl RunContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        Self::from_dir(Path::new("."), common_args)
    }

    pub fn from_dir(start_dir: &Path, common_args: &CommonArgs) -> Result<Self> {
        let loaded = load_config(start_dir)?;
        if loaded.from_file {
            debug!(dir = %loaded.base_dir.display(), "using config file");
        }

        let base = &loaded.base_dir;
        let config = loaded.config;
        let resolve = |arg: &Option<PathBuf>, configured: &str| {
            arg.clone().unwrap_or_else(|| base.join(configured))
        };

        Ok(Self {
            families_path: resolve(&common_args.families, &config.family_table),
            language_key_path: resolve(&common_args.language_key, &config.language_key),
            household_path: resolve(&common_args.household, &config.household),
            person_path: resolve(&common_args.person, &config.person),
            verbose: common_args.verbose,
            config,
            families: OnceCell::new(),
            language_key: OnceCell::new(),
        })
    }

    pub fn families(&self) -> Result<&FamilyGroup> {
        if let Some(families) = self.families.get() {
            return Ok(families);
        }
        let mut group = FamilyGroup::with_policy(self.config.duplicate_families);
        group
            .import_families(&self.families_path)
            .with_context(|| {
                format!(
                    "Failed to import family table: {}",
                    self.families_path.display()
                )
            })?;
        Ok(self.families.get_or_init(|| group))
    }

    pub fn language_key(&self) -> Result<&LanguageKey> {
        if let Some(key) = self.language_key.get() {
            return Ok(key);
        }
        let key = import_language_key(&self.language_key_path).with_context(|| {
            format!(
                "Failed to import language key: {}",
                self.language_key_path.display()
            )
        })?;
        Ok(self.language_key.get_or_init(|| key))
    }

    /// Load, merge and recode the survey files.
    pub fn recoded_dataset(&self) -> Result<Dataset> {
        let families = self.families()?;
        let key = self.language_key()?;

        let mut data = load_files(&self.household_path, &self.person_path)
            .context("Failed to load survey records")?;
        recode(&mut data, key, families).context("Failed to recode survey records")?;
        Ok(data)
    }
}
