use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::node::VariableAlias;

/// A named group of variables sharing a set of modes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableCollection {
    pub id: String,
    pub name: String,
    pub default_mode_id: String,
    #[serde(default)]
    pub variable_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub values_by_mode: HashMap<String, VariableValue>,
}

impl Variable {
    pub fn value_in_mode(&self, mode_id: &str) -> Option<&VariableValue> {
        self.values_by_mode.get(mode_id)
    }
}

/// RGBA color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

/// Value of a variable in one mode.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum VariableValue {
    Boolean(bool),
    Float(f64),
    String(String),
    /// Points at another variable.
    Alias(VariableAlias),
    Color(Color),
}

impl VariableValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            VariableValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_alias(&self) -> Option<&str> {
        match self {
            VariableValue::Alias(alias) => Some(&alias.id),
            _ => None,
        }
    }
}
