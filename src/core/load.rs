//! Loading and merging ACS household and person files.

use std::path::Path;

use tracing::{debug, info};

use super::{dataset::Dataset, error::Result};

/// Household identifier shared by both record sets.
pub const JOIN_COLUMN: &str = "SERIALNO";

/// Household columns kept from the housing file.
pub const HOUSEHOLD_COLUMNS: &[&str] = &["SERIALNO", "LNGI", "HHLANP", "HHL"];

/// Person columns kept from the person file.
pub const PERSON_COLUMNS: &[&str] = &["SERIALNO", "SPORDER", "AGEP", "LANP", "LANX", "PAP"];

/// Project both record sets, join them on [`JOIN_COLUMN`] and drop fully empty rows.
pub fn load_data(household: &Dataset, person: &Dataset) -> Result<Dataset> {
    let household = household.select(HOUSEHOLD_COLUMNS)?;
    let person = person.select(PERSON_COLUMNS)?;

    let mut merged = household.inner_join(&person, JOIN_COLUMN)?;
    let dropped = merged.drop_empty_rows();
    debug!(
        rows = merged.row_count(),
        dropped, "merged household and person records"
    );
    Ok(merged)
}

/// Read both CSV files in parallel and merge them.
pub fn load_files(household_path: &Path, person_path: &Path) -> Result<Dataset> {
    let (household, person) = rayon::join(
        || Dataset::from_csv_path(household_path, Some(HOUSEHOLD_COLUMNS)),
        || Dataset::from_csv_path(person_path, Some(PERSON_COLUMNS)),
    );
    let (household, person) = (household?, person?);
    info!(
        households = household.row_count(),
        persons = person.row_count(),
        "loaded survey records"
    );
    load_data(&household, &person)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{error::Error, value::Value};
    use std::fs;
    use tempfile::tempdir;

    const HOUSEHOLD_CSV: &str = "\
RT,SERIALNO,LNGI,HHLANP,HHL,NP
H,H1,1,9500,1,2
H,H2,2,1200,2,1
H,H3,1,625,3,0
";

    const PERSON_CSV: &str = "\
RT,SERIALNO,SPORDER,AGEP,LANP,LANX,PAP
P,H1,1,40,,2,0
P,H1,2,38,,2,-1
P,H2,1,71,1200,1,5000
P,H9,1,20,,2,0
";

    #[test]
    fn test_load_files_merges_on_serial_number() {
        let dir = tempdir().unwrap();
        let household = dir.path().join("psam_h.csv");
        let person = dir.path().join("psam_p.csv");
        fs::write(&household, HOUSEHOLD_CSV).unwrap();
        fs::write(&person, PERSON_CSV).unwrap();

        let data = load_files(&household, &person).unwrap();

        assert_eq!(data.row_count(), 3);
        assert_eq!(
            data.column_names().collect::<Vec<_>>(),
            vec!["SERIALNO", "LNGI", "HHLANP", "HHL", "SPORDER", "AGEP", "LANP", "LANX", "PAP"]
        );
        assert_eq!(
            data.column("SERIALNO").unwrap(),
            &[Value::text("H1"), Value::text("H1"), Value::text("H2")]
        );
        assert_eq!(
            data.column("LANP").unwrap(),
            &[Value::Missing, Value::Missing, Value::Number(1200.0)]
        );
    }

    #[test]
    fn test_load_data_requires_columns() {
        let household = Dataset::from_reader("SERIALNO,LNGI\nH1,1\n".as_bytes(), None).unwrap();
        let person = Dataset::from_reader(PERSON_CSV.as_bytes(), None).unwrap();

        let err = load_data(&household, &person).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { ref column } if column == "HHLANP"));
    }

    #[test]
    fn test_load_files_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_files(&dir.path().join("h.csv"), &dir.path().join("p.csv")).unwrap_err();
        assert_eq!(err.kind(), "io");
    }
}
