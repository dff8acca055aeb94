use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_recode_writes_csv_to_stdout() -> Result<()> {
    let test = CliTest::with_survey()?;

    let output = test.recode_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let csv = stdout(&output);
    let mut lines = csv.lines();
    let header = lines.next().unwrap_or_default();
    for column in ["SERIALNO", "HHL", "HHLANP_uncoded", "LANP_uncoded", "PAP"] {
        assert!(header.split(',').any(|c| c == column), "{header}");
    }
    // one row per person with a matching household
    assert_eq!(lines.count(), 8);

    assert!(csv.contains("English only household"));
    assert!(csv.contains("Sino-Tibetan"));
    assert!(csv.contains("Asian and Pacific Island"));
    assert!(!header.split(',').any(|c| c == "RT"));

    // summary moves to stderr so the CSV stays clean
    let err = stderr(&output);
    assert!(err.contains("\u{2713} Recoded 8 records (11 columns)"), "{err}");
    assert!(err.contains("English or Unspecified  2"), "{err}");

    Ok(())
}

#[test]
fn test_recode_to_output_file() -> Result<()> {
    let test = CliTest::with_survey()?;

    let output = test
        .recode_command()
        .args(["--output", "recoded.csv"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(
        out.starts_with("\u{2713} Recoded 8 records (11 columns) to recoded.csv\n"),
        "{out}"
    );
    assert!(out.contains("Household language families:"));
    assert!(out.contains("Dravidian"));

    let csv = test.read_file("recoded.csv")?;
    assert_eq!(csv.lines().count(), 9);
    assert!(csv.contains("Spanish"));

    Ok(())
}

#[test]
fn test_recode_non_numeric_code_aborts() -> Result<()> {
    let test = CliTest::with_survey()?;
    test.write_file(
        "psam_h53.csv",
        "SERIALNO,LNGI,HHLANP,HHL\n2019HU0000002,2,abc,2\n",
    )?;

    let output = test.recode_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let err = stderr(&output);
    assert!(err.contains("Failed to recode survey records"), "{err}");
    assert!(err.contains("HHLANP"), "{err}");
    assert!(err.contains("abc"), "{err}");
    assert!(stdout(&output).is_empty());

    Ok(())
}

#[test]
fn test_recode_missing_column_is_an_error() -> Result<()> {
    let test = CliTest::with_survey()?;
    test.write_file("psam_p53.csv", "SERIALNO,SPORDER,AGEP,LANP,LANX\nX,1,20,,2\n")?;

    let output = test.recode_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("PAP"));

    Ok(())
}

#[test]
fn test_recode_verbose_logs_to_stderr() -> Result<()> {
    let test = CliTest::with_survey()?;

    let output = test
        .recode_command()
        .args(["--verbose", "--output", "recoded.csv"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("loaded survey records"));

    Ok(())
}
