//! Layout node tree of a document snapshot.
//!
//! Nodes arrive as loosely-shaped JSON objects (`type`, `children`, and a
//! handful of auto-layout attributes that only some kinds carry). They are
//! deserialized through [`RawNode`] into the [`LayoutNode`] tagged union so
//! that only container kinds expose an [`AutoLayout`] payload.

use std::fmt;

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

// ============================================================
// Spacing attributes
// ============================================================

/// A spacing attribute of an auto-layout container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpacingFacet {
    /// Gap between auto-layout children.
    ItemSpacing,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
}

impl SpacingFacet {
    /// Every facet, in the order the analyzer visits them.
    pub const ALL: [SpacingFacet; 5] = [
        SpacingFacet::ItemSpacing,
        SpacingFacet::PaddingTop,
        SpacingFacet::PaddingRight,
        SpacingFacet::PaddingBottom,
        SpacingFacet::PaddingLeft,
    ];

    /// Attribute name as it appears on host nodes and in `boundVariables`.
    pub fn attribute(self) -> &'static str {
        match self {
            SpacingFacet::ItemSpacing => "itemSpacing",
            SpacingFacet::PaddingTop => "paddingTop",
            SpacingFacet::PaddingRight => "paddingRight",
            SpacingFacet::PaddingBottom => "paddingBottom",
            SpacingFacet::PaddingLeft => "paddingLeft",
        }
    }
}

impl fmt::Display for SpacingFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute())
    }
}

// ============================================================
// Auto-layout payload
// ============================================================

/// Auto-layout mode of a container. A missing `layoutMode` means `NONE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
    Grid,
    /// Any mode this tool does not know about. Still counts as enabled.
    #[serde(other)]
    Other,
}

/// Reference from a node attribute (or a variable value) to a variable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VariableAlias {
    pub id: String,
}

impl VariableAlias {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Per-attribute variable bindings. Bindings for non-spacing attributes
/// (fills, strokes, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundVariables {
    pub item_spacing: Option<VariableAlias>,
    pub padding_top: Option<VariableAlias>,
    pub padding_right: Option<VariableAlias>,
    pub padding_bottom: Option<VariableAlias>,
    pub padding_left: Option<VariableAlias>,
}

impl BoundVariables {
    pub fn get(&self, facet: SpacingFacet) -> Option<&VariableAlias> {
        match facet {
            SpacingFacet::ItemSpacing => self.item_spacing.as_ref(),
            SpacingFacet::PaddingTop => self.padding_top.as_ref(),
            SpacingFacet::PaddingRight => self.padding_right.as_ref(),
            SpacingFacet::PaddingBottom => self.padding_bottom.as_ref(),
            SpacingFacet::PaddingLeft => self.padding_left.as_ref(),
        }
    }
}

/// Spacing attributes carried by frames, components and instances.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoLayout {
    pub layout_mode: LayoutMode,
    pub item_spacing: Option<f64>,
    pub padding_top: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub padding_left: Option<f64>,
    pub bound_variables: BoundVariables,
}

impl AutoLayout {
    /// True unless the layout mode is `NONE`.
    pub fn is_enabled(&self) -> bool {
        self.layout_mode != LayoutMode::None
    }

    /// Magnitude of a facet, if the node defines one.
    pub fn value(&self, facet: SpacingFacet) -> Option<f64> {
        match facet {
            SpacingFacet::ItemSpacing => self.item_spacing,
            SpacingFacet::PaddingTop => self.padding_top,
            SpacingFacet::PaddingRight => self.padding_right,
            SpacingFacet::PaddingBottom => self.padding_bottom,
            SpacingFacet::PaddingLeft => self.padding_left,
        }
    }

    /// Identifier of the variable bound to a facet, if any.
    pub fn binding(&self, facet: SpacingFacet) -> Option<&str> {
        self.bound_variables
            .get(facet)
            .map(|alias| alias.id.as_str())
    }
}

// ============================================================
// Node kinds
// ============================================================

/// Node kinds whose auto-layout spacing is audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Frame,
    Component,
    Instance,
}

impl ContainerKind {
    pub fn from_type(node_type: &str) -> Option<Self> {
        match node_type {
            "FRAME" => Some(ContainerKind::Frame),
            "COMPONENT" => Some(ContainerKind::Component),
            "INSTANCE" => Some(ContainerKind::Instance),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContainerKind::Frame => "FRAME",
            ContainerKind::Component => "COMPONENT",
            ContainerKind::Instance => "INSTANCE",
        }
    }
}

/// Common read access to every node kind.
#[enum_dispatch]
pub trait SceneNode {
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    /// Host node type, e.g. `FRAME` or `TEXT`.
    fn node_type(&self) -> &str;

    /// Ordered children. Empty for nodes that cannot have any.
    fn children(&self) -> &[LayoutNode] {
        &[]
    }

    fn auto_layout(&self) -> Option<&AutoLayout> {
        None
    }
}

/// Frame, component or instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerNode {
    pub id: String,
    pub name: String,
    pub kind: ContainerKind,
    pub layout: AutoLayout,
    pub children: Vec<LayoutNode>,
}

/// A node with children but no auditable spacing (page, group, section, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct GroupNode {
    pub id: String,
    pub name: String,
    pub node_type: String,
    pub children: Vec<LayoutNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    pub id: String,
    pub name: String,
    pub node_type: String,
}

impl SceneNode for ContainerNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn node_type(&self) -> &str {
        self.kind.as_str()
    }

    fn children(&self) -> &[LayoutNode] {
        &self.children
    }

    fn auto_layout(&self) -> Option<&AutoLayout> {
        Some(&self.layout)
    }
}

impl SceneNode for GroupNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn node_type(&self) -> &str {
        &self.node_type
    }

    fn children(&self) -> &[LayoutNode] {
        &self.children
    }
}

impl SceneNode for LeafNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn node_type(&self) -> &str {
        &self.node_type
    }
}

/// One node of the design tree.
#[enum_dispatch(SceneNode)]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawNode")]
pub enum LayoutNode {
    Container(ContainerNode),
    Group(GroupNode),
    Leaf(LeafNode),
}

// ============================================================
// Wire shape
// ============================================================

/// Host node as it appears in the snapshot JSON.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    node_type: String,
    children: Option<Vec<LayoutNode>>,
    /// Absent and `null` both mean `NONE`.
    layout_mode: Option<LayoutMode>,
    item_spacing: Option<f64>,
    padding_top: Option<f64>,
    padding_right: Option<f64>,
    padding_bottom: Option<f64>,
    padding_left: Option<f64>,
    #[serde(default)]
    bound_variables: BoundVariables,
}

impl From<RawNode> for LayoutNode {
    fn from(raw: RawNode) -> Self {
        if let Some(kind) = ContainerKind::from_type(&raw.node_type) {
            return LayoutNode::Container(ContainerNode {
                id: raw.id,
                name: raw.name,
                kind,
                layout: AutoLayout {
                    layout_mode: raw.layout_mode.unwrap_or_default(),
                    item_spacing: raw.item_spacing,
                    padding_top: raw.padding_top,
                    padding_right: raw.padding_right,
                    padding_bottom: raw.padding_bottom,
                    padding_left: raw.padding_left,
                    bound_variables: raw.bound_variables,
                },
                children: raw.children.unwrap_or_default(),
            });
        }

        match raw.children {
            Some(children) => LayoutNode::Group(GroupNode {
                id: raw.id,
                name: raw.name,
                node_type: raw.node_type,
                children,
            }),
            None => LayoutNode::Leaf(LeafNode {
                id: raw.id,
                name: raw.name,
                node_type: raw.node_type,
            }),
        }
    }
}
