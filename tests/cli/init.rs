use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in [
        "familyTable",
        "languageKey",
        "household",
        "person",
        "duplicateFamilies",
        "focusFamilies",
    ] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\u{2713} Created .acslangrc.json\n");

    assert!(test.root().join(".acslangrc.json").exists());
    let content = test.read_file(".acslangrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".acslangrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains(".acslangrc.json already exists"));
    assert_eq!(test.read_file(".acslangrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_survey()?;

    test.command().arg("init").output()?;

    let output = test.classify_command().arg("1200").output()?;
    assert!(
        output.status.success(),
        "classify should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
