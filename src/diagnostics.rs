//! Non-fatal findings collected during an audit.
//!
//! Nothing here is an error: the audit always completes. Diagnostics explain
//! report keys that would otherwise look surprising, and are printed only in
//! verbose mode.

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::document::SpacingFacet;

/// A spacing attribute bound to a variable that is not in the variable table
/// (deleted, or owned by a library the snapshot does not include).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedBinding {
    pub node_id: String,
    pub node_name: String,
    #[serde(serialize_with = "serialize_facet")]
    pub facet: SpacingFacet,
    pub variable_id: String,
}

/// A spacing attribute bound to a variable whose default value is not a
/// number (a string or color variable, say). Still counted as a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NonNumericBinding {
    pub node_id: String,
    pub node_name: String,
    #[serde(serialize_with = "serialize_facet")]
    pub facet: SpacingFacet,
    pub token_name: String,
}

fn serialize_facet<S: serde::Serializer>(facet: &SpacingFacet, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(facet.attribute())
}

/// Trait for findings that can be printed by the CLI.
#[enum_dispatch]
pub trait Describe {
    /// One-line description of the finding.
    fn message(&self) -> String;

    /// Short rule-like identifier.
    fn code(&self) -> &'static str;

    fn hint(&self) -> Option<&'static str> {
        None
    }
}

impl Describe for UnresolvedBinding {
    fn message(&self) -> String {
        format!(
            "{} on \"{}\" ({}) is bound to unknown variable {}",
            self.facet, self.node_name, self.node_id, self.variable_id
        )
    }

    fn code(&self) -> &'static str {
        "unresolved-variable"
    }

    fn hint(&self) -> Option<&'static str> {
        Some("reported under \"Variable ID: <id>\"; include the owning library's variables in the snapshot to resolve it")
    }
}

impl Describe for NonNumericBinding {
    fn message(&self) -> String {
        format!(
            "{} on \"{}\" ({}) is bound to non-numeric variable {}",
            self.facet, self.node_name, self.node_id, self.token_name
        )
    }

    fn code(&self) -> &'static str {
        "non-numeric-variable"
    }
}

#[enum_dispatch(Describe)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Diagnostic {
    UnresolvedBinding(UnresolvedBinding),
    NonNumericBinding(NonNumericBinding),
}
