//! Recoding of raw ACS survey codes into descriptive labels.
//!
//! The language columns get two recodes: the exact label from the
//! [`LanguageKey`] replaces the code in place, and a `<column>_uncoded`
//! companion receives the coarser family from the [`FamilyGroup`].
//! The remaining survey flags are flat remaps.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::debug;

use super::{
    dataset::Dataset,
    error::{Error, Result},
    family::FamilyGroup,
    language_key::LanguageKey,
    value::Value,
};
use crate::utils::code_key;

pub const HOUSEHOLD_LANGUAGE: &str = "HHL";
pub const PRECISE_HOUSEHOLD_LANGUAGE: &str = "HHLANP";
pub const PERSONAL_LANGUAGE: &str = "LANP";
pub const LINGUISTIC_ISOLATION: &str = "LNGI";
pub const OTHER_LANGUAGE_AT_HOME: &str = "LANX";
pub const PUBLIC_ASSISTANCE: &str = "PAP";
/// Age in years; not recoded.
pub const AGE: &str = "AGEP";

/// Suffix of the family-level companion column.
pub const UNCODED_SUFFIX: &str = "_uncoded";

/// Labels for the five household language categories, codes 1 through 5.
pub const HOUSEHOLD_LANGUAGE_LABELS: [&str; 5] = [
    "English only",
    "Spanish",
    "Other Indo-European",
    "Asian and Pacific Island",
    "All other languages",
];

pub fn uncoded_column(column: &str) -> String {
    format!("{}{}", column, UNCODED_SUFFIX)
}

/// Recode every categorical column of a merged ACS dataset.
pub fn recode(data: &mut Dataset, key: &LanguageKey, families: &FamilyGroup) -> Result<()> {
    recode_household_language(data.column_mut(HOUSEHOLD_LANGUAGE)?);
    recode_language(data, PRECISE_HOUSEHOLD_LANGUAGE, key, families)?;
    recode_language(data, PERSONAL_LANGUAGE, key, families)?;
    recode_isolation(data.column_mut(LINGUISTIC_ISOLATION)?);
    recode_other_language(data.column_mut(OTHER_LANGUAGE_AT_HOME)?);
    recode_public_assistance(data.column_mut(PUBLIC_ASSISTANCE)?);
    Ok(())
}

/// Replace a language code column with labels and add its family column.
pub fn recode_language(
    data: &mut Dataset,
    column: &str,
    key: &LanguageKey,
    families: &FamilyGroup,
) -> Result<()> {
    let original = data.column(column)?.to_vec();

    let family_labels = classify_column(&original, column, families)?;
    let labels = original.iter().map(|value| label_value(value, key)).collect();

    data.set_column(column, labels)?;
    data.set_column(uncoded_column(column), family_labels)?;
    Ok(())
}

fn label_value(value: &Value, key: &LanguageKey) -> Value {
    let code = match value {
        Value::Missing => return Value::Missing,
        Value::Number(n) => code_key(*n),
        other => other.to_string(),
    };
    match key.lookup(&code) {
        Some(label) => Value::text(label),
        None => Value::Text(code),
    }
}

/// Classify each distinct code once and spread the result over every row.
///
/// Codes are truncated to integers first. Missing cells stay missing; a cell
/// that is not numeric aborts with [`Error::TypeCoercionFailure`].
pub fn classify_column(values: &[Value], column: &str, families: &FamilyGroup) -> Result<Vec<Value>> {
    let codes: Vec<Option<i64>> = values
        .iter()
        .enumerate()
        .map(|(row, value)| match value {
            Value::Missing => Ok(None),
            other => other
                .as_number()
                .map(|n| Some(n.trunc() as i64))
                .ok_or_else(|| Error::TypeCoercionFailure {
                    column: column.to_string(),
                    row: row + 1,
                    value: other.to_string(),
                }),
        })
        .collect::<Result<_>>()?;

    let mut distinct: Vec<i64> = codes.iter().flatten().copied().collect();
    distinct.sort_unstable();
    distinct.dedup();

    let classified: HashMap<i64, String> = distinct
        .par_iter()
        .map(|&code| (code, families.classify(code as f64).label().to_string()))
        .collect();
    debug!(column, distinct = classified.len(), "classified language codes");

    Ok(codes
        .into_iter()
        .map(|code| match code.and_then(|c| classified.get(&c)) {
            Some(label) => Value::text(label.as_str()),
            None => Value::Missing,
        })
        .collect())
}

/// `HHL`: codes 1-5 to their category labels.
pub fn recode_household_language(values: &mut [Value]) {
    remap(values, |code| {
        let index = code as usize;
        (code.fract() == 0.0 && (1.0..=5.0).contains(&code))
            .then(|| Value::text(HOUSEHOLD_LANGUAGE_LABELS[index - 1]))
    });
}

/// `LNGI`: 0 missing, 1 not isolated, 2 isolated.
pub fn recode_isolation(values: &mut [Value]) {
    remap(values, |code| match code {
        0.0 => Some(Value::Missing),
        1.0 => Some(Value::Bool(false)),
        2.0 => Some(Value::Bool(true)),
        _ => None,
    });
}

/// `LANX`: 0 missing, 1 speaks another language at home, 2 does not.
pub fn recode_other_language(values: &mut [Value]) {
    remap(values, |code| match code {
        0.0 => Some(Value::Missing),
        1.0 => Some(Value::Bool(true)),
        2.0 => Some(Value::Bool(false)),
        _ => None,
    });
}

/// `PAP`: any positive income is true; zero and the `-1` not-applicable code are false.
pub fn recode_public_assistance(values: &mut [Value]) {
    remap(values, |amount| Some(Value::Bool(amount > 0.0)));
}

fn remap(values: &mut [Value], rule: impl Fn(f64) -> Option<Value>) {
    for value in values.iter_mut() {
        if let Value::Number(code) = value
            && let Some(recoded) = rule(*code)
        {
            *value = recoded;
        }
    }
}
