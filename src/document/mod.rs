//! Read-only snapshot of a design document.
//!
//! The snapshot stands in for the live host: it carries the page trees, the
//! variable collections and the variables an audit needs. It is loaded once
//! per run and passed explicitly to the resolver and the collector.
//!
//! ## Module Structure
//!
//! - `node`: layout node tree (tagged union over node kinds)
//! - `variables`: variable collections, variables and their values

mod node;
mod variables;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

pub use node::{
    AutoLayout, BoundVariables, ContainerKind, ContainerNode, GroupNode, LayoutMode, LayoutNode,
    LeafNode, SceneNode, SpacingFacet, VariableAlias,
};
pub use variables::{Color, Variable, VariableCollection, VariableValue};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Page the user was looking at when the snapshot was taken.
    #[serde(default)]
    pub current_page_id: Option<String>,
    #[serde(default)]
    pub pages: Vec<LayoutNode>,
    #[serde(default)]
    pub variable_collections: Vec<VariableCollection>,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

impl Document {
    /// Pick the page to audit.
    ///
    /// An explicit selector matches a page id first, then a page name.
    /// Without one, the current page is used, falling back to the first page.
    pub fn select_page(&self, selector: Option<&str>) -> Option<&LayoutNode> {
        if let Some(selector) = selector {
            return self
                .pages
                .iter()
                .find(|page| page.id() == selector)
                .or_else(|| self.pages.iter().find(|page| page.name() == selector));
        }

        self.current_page_id
            .as_deref()
            .and_then(|id| self.pages.iter().find(|page| page.id() == id))
            .or_else(|| self.pages.first())
    }
}

pub fn parse_document(content: &str) -> Result<Document> {
    from_json(content).context("Failed to parse document snapshot")
}

pub fn load_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document snapshot: {}", path.display()))?;
    from_json(&content)
        .with_context(|| format!("Failed to parse document snapshot: {}", path.display()))
}

/// Layout trees nest arbitrarily deep, so the recursion limit is lifted and
/// the stack grows on demand.
fn from_json(content: &str) -> serde_json::Result<Document> {
    let mut deserializer = serde_json::Deserializer::from_str(content);
    deserializer.disable_recursion_limit();
    let document = Document::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(document)
}
