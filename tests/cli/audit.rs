use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::CliTest;

#[test]
fn test_audit_current_page() -> Result<()> {
    let test = CliTest::with_sample_document()?;

    assert_cmd_snapshot!(test.audit_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    Token       Value  Count  Type
    16px        16px       2  Raw value
    8px         8px        2  Raw value
    spacing/md  16px       2  Token

    ✓ Audited page "Screens": 2 auto-layout containers, 4 nodes
      2 token usages (1 distinct, 1 variable defined), 4 raw usages (2 distinct)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_audit_page_without_auto_layout() -> Result<()> {
    let test = CliTest::with_sample_document()?;

    assert_cmd_snapshot!(test.audit_command().args(["--page", "Archive"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ No spacing values found on page "Archive" (2 nodes checked)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_audit_json_is_results_message() -> Result<()> {
    let test = CliTest::with_sample_document()?;

    let output = test.audit_command().args(["--format", "json"]).output()?;
    assert!(output.status.success());

    let message: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        message,
        json!({
            "type": "results",
            "tokens": {
                "16px": { "value": "16px", "count": 2, "isRawValue": true },
                "8px": { "value": "8px", "count": 2, "isRawValue": true },
                "spacing/md": { "value": "16px", "count": 2, "isToken": true }
            }
        })
    );

    Ok(())
}

#[test]
fn test_audit_document_from_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("snapshots/app.json", crate::SAMPLE_DOCUMENT)?;
    test.write_file(
        ".spacingauditrc.json",
        r#"{ "document": "./snapshots/app.json", "page": "0:2" }"#,
    )?;

    let output = test.audit_command().output()?;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("page \"Archive\""));

    Ok(())
}

#[test]
fn test_audit_unresolved_binding_warns() -> Result<()> {
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
                  "itemSpacing": 4,
                  "boundVariables": { "itemSpacing": { "type": "VARIABLE_ALIAS", "id": "VariableID:gone" } }
                }
              ]
            }
          ]
        }"#,
    )?;

    let output = test.audit_command().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Variable ID: VariableID:gone  4px"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr,
        "warning: 1 variable binding could not be fully resolved (use -v for details)\n"
    );

    let verbose = test.audit_command().arg("-v").output()?;
    let stderr = String::from_utf8_lossy(&verbose.stderr);
    assert!(stderr.contains("unknown variable VariableID:gone"));
    assert!(stderr.contains("No .spacingauditrc.json found"));

    Ok(())
}

#[test]
fn test_audit_unknown_page_fails() -> Result<()> {
    let test = CliTest::with_sample_document()?;

    assert_cmd_snapshot!(test.audit_command().args(["--page", "Nope"]), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Page not found in document: "Nope"
    "#);

    Ok(())
}

#[test]
fn test_audit_missing_document_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.audit_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: Failed to read document snapshot:"));
    assert!(stderr.contains("document.json"));

    Ok(())
}

#[test]
fn test_audit_document_from_env() -> Result<()> {
    let test = CliTest::with_file("elsewhere/snap.json", crate::SAMPLE_DOCUMENT)?;

    let output = test
        .audit_command()
        .env("SPACING_AUDIT_DOCUMENT", "elsewhere/snap.json")
        .output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
