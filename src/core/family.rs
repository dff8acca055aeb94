//! Linguistic family ranges and the classifier built on top of them.
//!
//! ACS language codes are grouped into families by contiguous code ranges
//! (for example `1, 1199, Indo-European`). A [`FamilyGroup`] holds those
//! ranges in import order and maps a single code to the first range that
//! contains it.

use std::{borrow::Cow, fmt, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::{Error, Result};

/// Label returned when no configured range contains a code.
pub const UNSPECIFIED_LABEL: &str = "English or Unspecified";

/// Spanish is carved out of the Indo-European range so it can be analyzed on its own.
pub const SPANISH_CODE: f64 = 1200.0;
pub const SPANISH_LABEL: &str = "Spanish";

/// Field separator used by family-range tables.
const FAMILY_FIELD_SEPARATOR: &str = ", ";

/// A named, inclusive range of language codes.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageFamily {
    name: String,
    min: f64,
    max: f64,
}

impl LanguageFamily {
    /// `min <= max` is the caller's responsibility; an inverted range never matches.
    pub fn new(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            min,
            max,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Inclusive at both ends.
    pub fn contains(&self, code: f64) -> bool {
        self.min <= code && code <= self.max
    }

    fn overlaps(&self, other: &LanguageFamily) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

impl fmt::Display for LanguageFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// What to do when a family is added with a lower bound that is already registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with [`Error::DuplicateLowerBound`].
    #[default]
    Reject,
    /// Overwrite the existing entry in place, keeping its position.
    Replace,
}

/// Result of classifying one language code.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification<'a> {
    /// Borrowed from the group, or the owned Spanish singleton.
    Family(Cow<'a, LanguageFamily>),
    Unspecified,
}

impl Classification<'_> {
    pub fn label(&self) -> &str {
        match self {
            Classification::Family(family) => family.name(),
            Classification::Unspecified => UNSPECIFIED_LABEL,
        }
    }

    pub fn family(&self) -> Option<&LanguageFamily> {
        match self {
            Classification::Family(family) => Some(&**family),
            Classification::Unspecified => None,
        }
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, Classification::Unspecified)
    }
}

impl fmt::Display for Classification<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ordered registry of language families keyed by lower bound.
///
/// Ranges may overlap. Classification returns the first family, in
/// registration order, whose range contains the code.
#[derive(Debug, Clone, Default)]
pub struct FamilyGroup {
    families: Vec<LanguageFamily>,
    policy: DuplicatePolicy,
}

impl FamilyGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            families: Vec::new(),
            policy,
        }
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageFamily> {
        self.families.iter()
    }

    /// Register a single family.
    pub fn add(&mut self, family: LanguageFamily) -> Result<()> {
        let index = insert_family(&mut self.families, family, self.policy)?;
        self.warn_overlaps(&[index]);
        Ok(())
    }

    /// Read a `min, max, name` table from disk and register every row.
    ///
    /// Returns the number of rows imported. On any error nothing is registered.
    pub fn import_families(&mut self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let count = self.import_str(&content)?;
        debug!(path = %path.display(), count, "imported family table");
        Ok(count)
    }

    /// Same as [`FamilyGroup::import_families`] for in-memory table content.
    pub fn import_str(&mut self, source: &str) -> Result<usize> {
        let parsed = parse_families(source)?;
        let count = parsed.len();

        let mut staged = self.families.clone();
        let mut added = Vec::with_capacity(count);
        for family in parsed {
            added.push(insert_family(&mut staged, family, self.policy)?);
        }
        self.families = staged;
        self.warn_overlaps(&added);

        Ok(count)
    }

    /// Map a code to its family, or [`Classification::Unspecified`].
    pub fn classify(&self, code: f64) -> Classification<'_> {
        if code == SPANISH_CODE {
            return Classification::Family(Cow::Owned(LanguageFamily::new(
                SPANISH_LABEL,
                SPANISH_CODE,
                SPANISH_CODE,
            )));
        }

        self.families
            .iter()
            .find(|family| family.contains(code))
            .map(|family| Classification::Family(Cow::Borrowed(family)))
            .unwrap_or(Classification::Unspecified)
    }

    /// Pairs of registered families whose ranges intersect, earlier family first.
    pub fn overlaps(&self) -> Vec<(&LanguageFamily, &LanguageFamily)> {
        self.overlapping_indices()
            .into_iter()
            .map(|(i, j)| (&self.families[i], &self.families[j]))
            .collect()
    }

    fn overlapping_indices(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, first) in self.families.iter().enumerate() {
            for (j, second) in self.families.iter().enumerate().skip(i + 1) {
                if first.overlaps(second) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Warn once per overlapping pair that involves a family at one of `added`.
    fn warn_overlaps(&self, added: &[usize]) {
        for (i, j) in self.overlapping_indices() {
            if !added.contains(&i) && !added.contains(&j) {
                continue;
            }
            let (first, second) = (&self.families[i], &self.families[j]);
            warn!(
                "family ranges overlap: {} [{}, {}] and {} [{}, {}]; {} wins",
                first.name, first.min, first.max, second.name, second.min, second.max, first.name
            );
        }
    }
}

fn insert_family(
    families: &mut Vec<LanguageFamily>,
    family: LanguageFamily,
    policy: DuplicatePolicy,
) -> Result<usize> {
    match families.iter().position(|f| f.min == family.min) {
        None => {
            families.push(family);
            Ok(families.len() - 1)
        }
        Some(index) => match policy {
            DuplicatePolicy::Reject => Err(Error::DuplicateLowerBound {
                min: family.min,
                existing: families[index].name.clone(),
            }),
            DuplicatePolicy::Replace => {
                debug!(
                    "replacing family {} with {} at lower bound {}",
                    families[index].name, family.name, family.min
                );
                families[index] = family;
                Ok(index)
            }
        },
    }
}

/// Parse a family-range table: one `min, max, name` record per line.
///
/// Blank lines are skipped. Line numbers in errors are 1-based.
pub fn parse_families(source: &str) -> Result<Vec<LanguageFamily>> {
    let mut families = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let line_number = index + 1;

        let fields: Vec<&str> = line.split(FAMILY_FIELD_SEPARATOR).collect();
        let [min, max, name] = fields.as_slice() else {
            return Err(Error::MalformedTableLine {
                line: line_number,
                expected: 3,
                found: fields.len(),
                content: line.to_string(),
            });
        };

        let min = parse_bound(min, line_number)?;
        let max = parse_bound(max, line_number)?;
        families.push(LanguageFamily::new(*name, min, max));
    }

    Ok(families)
}

fn parse_bound(value: &str, line: usize) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| Error::NonNumericRange {
        line,
        value: value.to_string(),
    })
}
