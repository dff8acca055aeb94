use anyhow::Result;

use crate::{CliTest, FAMILY_TABLE, stderr, stdout};

#[test]
fn test_classify_reports_family_and_range() -> Result<()> {
    let test = CliTest::with_survey()?;

    let output = test.classify_command().args(["600", "2050"]).output()?;
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains(" 600  Indo-European  [1, 1199]\n"), "{out}");
    assert!(out.contains("2050  Sino-Tibetan  [2000, 2999]\n"), "{out}");
    assert!(out.ends_with("\u{2713} Classified 2 codes against 4 families\n"));

    Ok(())
}

#[test]
fn test_classify_spanish_and_unspecified() -> Result<()> {
    let test = CliTest::with_survey()?;

    let output = test
        .classify_command()
        .args(["1200", "99999", "-5"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains(" 1200  Spanish\n"), "{out}");
    assert!(out.contains("99999  English or Unspecified\n"), "{out}");
    assert!(out.contains("   -5  English or Unspecified\n"), "{out}");

    Ok(())
}

#[test]
fn test_classify_with_families_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("tables/families.txt", "3000, 3199, Dravidian\n")?;

    let output = test
        .classify_command()
        .args(["--families", "tables/families.txt", "3100"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("3100  Dravidian  [3000, 3199]"));

    Ok(())
}

#[test]
fn test_classify_uses_config_paths() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("tables/fam.txt", FAMILY_TABLE)?;
    test.write_file(".acslangrc.json", r#"{ "familyTable": "tables/fam.txt" }"#)?;

    let output = test.classify_command().arg("1500").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("1500  Romance  [1201, 1999]"));

    Ok(())
}

#[test]
fn test_classify_malformed_table_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "shortened_fam_labels.txt",
        "1, 1199, Indo-European\n2000, 2999\n",
    )?;

    let output = test.classify_command().arg("600").output()?;
    assert_eq!(output.status.code(), Some(2));

    let err = stderr(&output);
    assert!(err.starts_with("Error: Failed to import family table"), "{err}");
    assert!(err.contains("line 2"), "{err}");
    assert!(stdout(&output).is_empty());

    Ok(())
}

#[test]
fn test_classify_missing_table_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.classify_command().arg("600").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("shortened_fam_labels.txt"));

    Ok(())
}

#[test]
fn test_classify_requires_codes() -> Result<()> {
    let test = CliTest::with_survey()?;

    let output = test.classify_command().output()?;
    assert!(!output.status.success());

    Ok(())
}
