use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_analyze_reports_tables_and_tests() -> Result<()> {
    let test = CliTest::with_survey()?;

    let output = test.analyze_command().output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let out = stdout(&output);
    assert!(
        out.starts_with("Analyzed 8 records, 3 in focus families\n"),
        "{out}"
    );
    for title in [
        "Linguistic isolation by household language family",
        "Linguistic isolation by household language",
        "Linguistic isolation by personal language family (focus families)",
        "Public assistance by household language",
        "Public assistance by personal language family",
    ] {
        assert!(out.contains(title), "missing table {title}");
    }
    assert!(out.contains("Age by household language family  (HHLANP_uncoded / AGEP)"));
    assert!(out.contains("Age by household language  (HHL / AGEP)"));
    assert_eq!(out.matches("Chi-square:").count(), 3);
    assert!(out.contains("(HHLANP_uncoded / LNGI)"));
    assert!(!out.contains("English or Unspecified"));

    Ok(())
}

#[test]
fn test_analyze_focus_families_from_config() -> Result<()> {
    let test = CliTest::with_survey()?;
    test.write_file(".acslangrc.json", r#"{ "focusFamilies": ["Dravidian"] }"#)?;

    let output = test.analyze_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.starts_with("Analyzed 8 records, 1 in focus families\n"));
    // a single focus category cannot be tested
    assert!(out.contains("skipped:"), "{out}");

    Ok(())
}

#[test]
fn test_analyze_missing_survey_file() -> Result<()> {
    let test = CliTest::with_survey()?;

    let output = test
        .analyze_command()
        .args(["--person", "nowhere.csv"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("nowhere.csv"));

    Ok(())
}
