//! Variable resolution.
//!
//! Builds the lookup table the analyzer uses to turn a bound variable id
//! into a display name (`<collection>/<variable>`).

use std::collections::{HashMap, HashSet};

use crate::document::{Document, VariableValue};

/// A variable as seen by the analyzer.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableRecord {
    pub id: String,
    pub name: String,
    pub collection_name: String,
    /// Value under the owning collection's default mode.
    pub resolved_value: Option<VariableValue>,
}

impl VariableRecord {
    /// Display name used as the report key for token usages.
    pub fn token_name(&self) -> String {
        format!("{}/{}", self.collection_name, self.name)
    }
}

/// Variable id → record. Built once per audit run, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableTable {
    records: HashMap<String, VariableRecord>,
}

impl VariableTable {
    pub fn get(&self, id: &str) -> Option<&VariableRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn insert(&mut self, record: VariableRecord) {
        self.records.insert(record.id.clone(), record);
    }

    /// Numeric default value of a variable, following alias chains.
    ///
    /// Returns `None` for non-numeric values, unknown ids and alias cycles.
    pub fn numeric_value(&self, id: &str) -> Option<f64> {
        let mut visited = HashSet::new();
        let mut current = id;

        while visited.insert(current) {
            let value = self.get(current)?.resolved_value.as_ref()?;
            if let Some(number) = value.as_number() {
                return Some(number);
            }
            current = value.as_alias()?;
        }

        None
    }
}

impl FromIterator<VariableRecord> for VariableTable {
    fn from_iter<T: IntoIterator<Item = VariableRecord>>(iter: T) -> Self {
        let mut table = VariableTable::default();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

/// Enumerate every collection and every variable it lists.
///
/// Ids a collection lists but the snapshot does not contain are skipped;
/// a dangling reference is a valid document state.
pub fn build_variable_table(document: &Document) -> VariableTable {
    let variables: HashMap<&str, _> = document
        .variables
        .iter()
        .map(|variable| (variable.id.as_str(), variable))
        .collect();

    document
        .variable_collections
        .iter()
        .flat_map(|collection| {
            collection
                .variable_ids
                .iter()
                .filter_map(|id| variables.get(id.as_str()))
                .map(move |variable| VariableRecord {
                    id: variable.id.clone(),
                    name: variable.name.clone(),
                    collection_name: collection.name.clone(),
                    resolved_value: variable
                        .value_in_mode(&collection.default_mode_id)
                        .cloned(),
                })
        })
        .collect()
}
