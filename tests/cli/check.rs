use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, DEDUPED, TRANSLATIONS, run};

#[test]
fn test_check_reports_duplicates_without_writing() -> Result<()> {
    let test = CliTest::with_file("translations.ts", TRANSLATIONS)?;

    let mut cmd = test.check_command();
    cmd.arg("translations.ts");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert_snapshot!(output.stdout, @r"
    warning: duplicate key 'greeting' in [Language.EN]: {
      --> translations.ts:9
    warning: duplicate key 'farewell' in [Language.HI]: {
      --> translations.ts:16
    ✘ Found 2 duplicate key(s) in 1 file(s)
    ");
    assert_eq!(test.read_file("translations.ts")?, TRANSLATIONS);

    Ok(())
}

#[test]
fn test_check_clean_file() -> Result<()> {
    let test = CliTest::with_file("translations.ts", DEDUPED)?;

    let mut cmd = test.check_command();
    cmd.arg("translations.ts");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout, @"✓ Checked 1 file - no duplicate keys found");

    Ok(())
}

#[test]
fn test_check_requires_path() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("<PATH>"));

    Ok(())
}

#[test]
fn test_check_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_file("translations.ts", DEDUPED)?;
    test.write_file(".keydeduprc.json", r#"{ "headerPrefix": "" }"#)?;

    let mut cmd = test.check_command();
    cmd.arg("translations.ts");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("'headerPrefix' must not be empty"));

    Ok(())
}
