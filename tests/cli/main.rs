use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod audit;
mod export;

const BIN_NAME: &str = "spacing-audit";

/// One page, one spacing variable. `Card` binds its vertical padding to
/// `spacing/md` and sets everything else raw; `Row` only sets its gap.
pub const SAMPLE_DOCUMENT: &str = r#"{
  "currentPageId": "0:1",
  "pages": [
    {
      "id": "0:1",
      "name": "Screens",
      "type": "CANVAS",
      "children": [
        {
          "id": "1:1",
          "name": "Card",
          "type": "FRAME",
          "layoutMode": "VERTICAL",
          "itemSpacing": 8,
          "paddingTop": 16,
          "paddingBottom": 16,
          "paddingLeft": 16,
          "paddingRight": 16,
          "boundVariables": {
            "paddingTop": { "type": "VARIABLE_ALIAS", "id": "VariableID:md" },
            "paddingBottom": { "type": "VARIABLE_ALIAS", "id": "VariableID:md" }
          },
          "children": [
            {
              "id": "1:2",
              "name": "Row",
              "type": "FRAME",
              "layoutMode": "HORIZONTAL",
              "itemSpacing": 8,
              "paddingTop": 0,
              "paddingBottom": 0,
              "paddingLeft": 0,
              "paddingRight": 0
            },
            { "id": "1:3", "name": "Title", "type": "TEXT" }
          ]
        }
      ]
    },
    {
      "id": "0:2",
      "name": "Archive",
      "type": "CANVAS",
      "children": [
        { "id": "2:1", "name": "Old", "type": "FRAME", "layoutMode": "NONE", "itemSpacing": 12 }
      ]
    }
  ],
  "variableCollections": [
    { "id": "VariableCollectionId:1", "name": "spacing", "defaultModeId": "1:0", "variableIds": ["VariableID:md"] }
  ],
  "variables": [
    { "id": "VariableID:md", "name": "md", "resolvedType": "FLOAT", "valuesByMode": { "1:0": 16 } }
  ]
}"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config lookup at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    /// A project with `SAMPLE_DOCUMENT` at the default `document.json`.
    pub fn with_sample_document() -> Result<Self> {
        Self::with_file("document.json", SAMPLE_DOCUMENT)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn audit_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("audit");
        cmd
    }

    pub fn export_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("export");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}
