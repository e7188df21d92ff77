use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const SAMPLE_CSV: &str = "Token,Value,Count,Type\n\
                          16px,16px,2,Raw value\n\
                          8px,8px,2,Raw value\n\
                          spacing/md,16px,2,Token";

#[test]
fn test_export_default_output() -> Result<()> {
    let test = CliTest::with_sample_document()?;

    let output = test.export_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(test.read_file("spacing-token-audit.csv")?, SAMPLE_CSV);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("✓ Exported 3 rows from page \"Screens\" to "));
    assert!(stdout.trim_end().ends_with("spacing-token-audit.csv (text/csv)"));

    Ok(())
}

#[test]
fn test_export_output_override_creates_directories() -> Result<()> {
    let test = CliTest::with_sample_document()?;

    let output = test
        .export_command()
        .args(["--output", "reports/spacing.csv"])
        .output()?;
    assert!(output.status.success());

    assert_eq!(test.read_file("reports/spacing.csv")?, SAMPLE_CSV);
    assert!(!test.root().join("spacing-token-audit.csv").exists());

    Ok(())
}

#[test]
fn test_export_output_from_config() -> Result<()> {
    let test = CliTest::with_sample_document()?;
    test.write_file(".spacingauditrc.json", r#"{ "output": "./out/audit.csv" }"#)?;

    let output = test.export_command().output()?;
    assert!(output.status.success());

    assert_eq!(test.read_file("out/audit.csv")?, SAMPLE_CSV);

    Ok(())
}

#[test]
fn test_export_quoting() -> Result<()> {
    let test = CliTest::with_file(
        "document.json",
        r#"{
          "pages": [
            {
              "id": "0:1",
              "name": "Page 1",
              "type": "CANVAS",
              "children": [
                {
                  "id": "1:1",
                  "name": "Stack",
                  "type": "FRAME",
                  "layoutMode": "VERTICAL",
                  "itemSpacing": 12,
                  "boundVariables": { "itemSpacing": { "type": "VARIABLE_ALIAS", "id": "VariableID:gap" } }
                }
              ]
            }
          ],
          "variableCollections": [
            { "id": "C:1", "name": "Spacing, compact", "defaultModeId": "1:0", "variableIds": ["VariableID:gap"] }
          ],
          "variables": [
            { "id": "VariableID:gap", "name": "gap", "valuesByMode": { "1:0": 12 } }
          ]
        }"#,
    )?;

    test.export_command().output()?;
    assert_eq!(
        test.read_file("spacing-token-audit.csv")?,
        "Token,Value,Count,Type\n\"Spacing, compact/gap\",12px,1,Token"
    );

    test.export_command().args(["--quoting", "none"]).output()?;
    assert_eq!(
        test.read_file("spacing-token-audit.csv")?,
        "Token,Value,Count,Type\nSpacing, compact/gap,12px,1,Token"
    );

    Ok(())
}

#[test]
fn test_export_empty_report_writes_header() -> Result<()> {
    let test = CliTest::with_sample_document()?;

    let output = test.export_command().args(["--page", "Archive"]).output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("spacing-token-audit.csv")?,
        "Token,Value,Count,Type"
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Exported 0 rows"));

    Ok(())
}
