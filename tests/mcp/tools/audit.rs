use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use spacing_audit::mcp::{SpacingAuditMcpServer, types::AuditSpacingParams};

use crate::{McpTestFixture, extract_tool_result_json, fixture_with_sample_document};

fn params(fixture: &McpTestFixture) -> AuditSpacingParams {
    AuditSpacingParams {
        project_root_path: fixture.root(),
        document_path: None,
        page: None,
    }
}

// ============================================================================
// audit_spacing tests
// ============================================================================

#[tokio::test]
async fn test_audit_current_page() {
    let fixture = fixture_with_sample_document().unwrap();
    let server = SpacingAuditMcpServer::new();

    let result = server
        .audit_spacing(Parameters(params(&fixture)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(
        json_result["message"],
        json!({
            "type": "results",
            "tokens": {
                "4px": { "value": "4px", "count": 1, "isRawValue": true },
                "8px": { "value": "8px", "count": 2, "isRawValue": true },
                "spacing/lg": { "value": "24px", "count": 2, "isToken": true }
            }
        })
    );
    assert_eq!(json_result["pageName"], "Screens");
    assert_eq!(json_result["variableCount"], 1);
    assert_eq!(
        json_result["summary"],
        json!({
            "nodesVisited": 3,
            "containersAudited": 2,
            "tokenOccurrences": 2,
            "rawOccurrences": 3
        })
    );
    assert_eq!(json_result["diagnostics"], json!([]));
}

#[tokio::test]
async fn test_audit_page_override_reports_unresolved_binding() {
    let fixture = fixture_with_sample_document().unwrap();
    let server = SpacingAuditMcpServer::new();

    let result = server
        .audit_spacing(Parameters(AuditSpacingParams {
            page: Some("0:2".to_string()),
            ..params(&fixture)
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["pageName"], "Archive");
    assert_eq!(
        json_result["message"]["tokens"]["Variable ID: VariableID:missing"],
        json!({ "value": "32px", "count": 1, "isToken": true })
    );
    assert_eq!(
        json_result["diagnostics"],
        json!([{
            "kind": "unresolvedBinding",
            "nodeId": "2:1",
            "nodeName": "Old",
            "facet": "itemSpacing",
            "variableId": "VariableID:missing"
        }])
    );
}

#[tokio::test]
async fn test_audit_document_path_override() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_json("snapshots/app.json", &crate::sample_document())
        .unwrap();
    let server = SpacingAuditMcpServer::new();

    let result = server
        .audit_spacing(Parameters(AuditSpacingParams {
            document_path: Some("snapshots/app.json".to_string()),
            ..params(&fixture)
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["pageName"], "Screens");
}

#[tokio::test]
async fn test_audit_empty_document() {
    let fixture = McpTestFixture::with_document(&json!({ "pages": [] })).unwrap();
    let server = SpacingAuditMcpServer::new();

    let result = server
        .audit_spacing(Parameters(params(&fixture)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert!(json_result["pageName"].is_null());
    assert_eq!(json_result["message"]["tokens"], json!({}));
    assert_eq!(json_result["summary"]["nodesVisited"], 0);
}

#[tokio::test]
async fn test_audit_errors() {
    let server = SpacingAuditMcpServer::new();

    // Missing document
    let fixture = McpTestFixture::new().unwrap();
    assert!(
        server
            .audit_spacing(Parameters(params(&fixture)))
            .await
            .is_err()
    );

    // Unknown page
    let fixture = fixture_with_sample_document().unwrap();
    assert!(
        server
            .audit_spacing(Parameters(AuditSpacingParams {
                page: Some("Nope".to_string()),
                ..params(&fixture)
            }))
            .await
            .is_err()
    );
}
