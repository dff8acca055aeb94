//! Row and value filters applied before analysis.

use crate::core::{
    Dataset, Error, LanguageKey, Result, UNSPECIFIED_LABEL, Value,
    recode::{
        HOUSEHOLD_LANGUAGE, PERSONAL_LANGUAGE, PRECISE_HOUSEHOLD_LANGUAGE, UNCODED_SUFFIX,
    },
};

/// Key code of the "English only household" precise household language.
pub const ENGLISH_HOUSEHOLD_CODE: &str = "9500.0";
/// Key code of English as a personal language.
pub const ENGLISH_PERSONAL_CODE: &str = "9999.0";

const ENGLISH_ONLY: &str = "English only";
const NO_ENGLISH_SUFFIX: &str = "_noEnglish";

/// Blank out English answers for the recognized `fields`.
///
/// `HHLANP`, `HHL` and `LANP` get a `<field>_noEnglish` companion column;
/// family columns (`*_uncoded`) have the unspecified label blanked in place.
/// Unrecognized fields are ignored.
pub fn exclude_english(data: &mut Dataset, fields: &[&str], key: &LanguageKey) -> Result<()> {
    for field in fields {
        match *field {
            PRECISE_HOUSEHOLD_LANGUAGE => {
                let english = english_label(key, ENGLISH_HOUSEHOLD_CODE)?;
                add_without(data, field, english)?;
            }
            HOUSEHOLD_LANGUAGE => add_without(data, field, ENGLISH_ONLY)?,
            PERSONAL_LANGUAGE => {
                let english = english_label(key, ENGLISH_PERSONAL_CODE)?;
                add_without(data, field, english)?;
            }
            uncoded if uncoded.ends_with(UNCODED_SUFFIX) => {
                blank_text(data.column_mut(uncoded)?, UNSPECIFIED_LABEL);
            }
            _ => {}
        }
    }
    Ok(())
}

/// Rows whose `column` value (string form) is one of `names`.
pub fn filter_categories(data: &Dataset, column: &str, names: &[String]) -> Result<Dataset> {
    let values = data.column(column)?;
    let wanted: Vec<String> = values.iter().map(Value::to_string).collect();
    Ok(data.filter_rows(|row| names.contains(&wanted[row])))
}

fn english_label<'a>(key: &'a LanguageKey, code: &str) -> Result<&'a str> {
    key.lookup(code).ok_or_else(|| Error::MissingLabel {
        code: code.to_string(),
    })
}

fn add_without(data: &mut Dataset, field: &str, label: &str) -> Result<()> {
    let mut values = data.column(field)?.to_vec();
    blank_text(&mut values, label);
    data.set_column(format!("{}{}", field, NO_ENGLISH_SUFFIX), values)
}

fn blank_text(values: &mut [Value], label: &str) {
    for value in values.iter_mut() {
        if matches!(value, Value::Text(text) if text == label) {
            *value = Value::Missing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Column;
    use pretty_assertions::assert_eq;

    fn key() -> LanguageKey {
        LanguageKey::parse("9500,English only household\n9999,English\n1200,Spanish\n").unwrap()
    }

    fn sample() -> Dataset {
        Dataset::from_columns(vec![
            Column::new(
                "HHLANP",
                vec![Value::text("English only household"), Value::text("Spanish")],
            ),
            Column::new("HHL", vec![Value::text("English only"), Value::text("Spanish")]),
            Column::new("LANP", vec![Value::Missing, Value::text("English")]),
            Column::new(
                "HHLANP_uncoded",
                vec![Value::text(UNSPECIFIED_LABEL), Value::text("Spanish")],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_exclude_english() {
        let mut data = sample();
        exclude_english(
            &mut data,
            &["HHLANP_uncoded", "HHL", "LANP", "HHLANP", "AGEP"],
            &key(),
        )
        .unwrap();

        assert_eq!(
            data.column("HHLANP_noEnglish").unwrap(),
            &[Value::Missing, Value::text("Spanish")]
        );
        assert_eq!(
            data.column("HHL_noEnglish").unwrap(),
            &[Value::Missing, Value::text("Spanish")]
        );
        assert_eq!(
            data.column("LANP_noEnglish").unwrap(),
            &[Value::Missing, Value::Missing]
        );
        assert_eq!(
            data.column("HHLANP_uncoded").unwrap(),
            &[Value::Missing, Value::text("Spanish")]
        );
        // originals untouched
        assert_eq!(
            data.column("HHL").unwrap(),
            &[Value::text("English only"), Value::text("Spanish")]
        );
    }

    #[test]
    fn test_exclude_english_needs_key_label() {
        let mut data = sample();
        let err = exclude_english(&mut data, &["LANP"], &LanguageKey::new()).unwrap_err();
        assert!(matches!(err, Error::MissingLabel { ref code } if code == "9999.0"));
    }

    #[test]
    fn test_filter_categories() {
        let data = sample();
        let subset = filter_categories(&data, "HHL", &["Spanish".to_string()]).unwrap();
        assert_eq!(subset.row_count(), 1);
        assert_eq!(subset.column("LANP").unwrap(), &[Value::text("English")]);
    }
}
