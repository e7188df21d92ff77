//! Spacing usage report.
//!
//! A [`Report`] is the frequency table produced by one audit run: report key
//! (token display name or raw `"<n>px"` string) → [`TokenUsageEntry`].

use std::collections::BTreeMap;

use serde::{Serialize, Serializer, ser::SerializeStruct};

/// Header row of the rendered report.
pub const REPORT_HEADER: [&str; 4] = ["Token", "Value", "Count", "Type"];

/// Whether a spacing value comes from a variable or is hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    Token,
    RawValue,
}

impl Classification {
    /// Human-readable label used in tables and CSV.
    pub fn label(self) -> &'static str {
        match self {
            Classification::Token => "Token",
            Classification::RawValue => "Raw value",
        }
    }

    /// Flag name used in the serialized entry (`isToken` / `isRawValue`).
    fn flag(self) -> &'static str {
        match self {
            Classification::Token => "isToken",
            Classification::RawValue => "isRawValue",
        }
    }
}

/// Usage of one report key.
///
/// `value` and `classification` are fixed by the first occurrence; later
/// occurrences only bump `count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenUsageEntry {
    pub value: String,
    pub count: usize,
    pub classification: Classification,
}

impl TokenUsageEntry {
    pub fn is_token(&self) -> bool {
        self.classification == Classification::Token
    }

    pub fn is_raw_value(&self) -> bool {
        self.classification == Classification::RawValue
    }
}

impl Serialize for TokenUsageEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TokenUsageEntry", 3)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field(self.classification.flag(), &true)?;
        state.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    entries: BTreeMap<String, TokenUsageEntry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`.
    ///
    /// A new key gets an entry with count 1; an existing key keeps its
    /// first value and classification.
    pub fn record(&mut self, key: String, value: String, classification: Classification) {
        self.entries
            .entry(key)
            .and_modify(|entry| entry.count += 1)
            .or_insert(TokenUsageEntry {
                value,
                count: 1,
                classification,
            });
    }

    pub fn get(&self, key: &str) -> Option<&TokenUsageEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenUsageEntry)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry))
    }

    /// Number of distinct keys with the given classification.
    pub fn distinct(&self, classification: Classification) -> usize {
        self.entries
            .values()
            .filter(|entry| entry.classification == classification)
            .count()
    }

    /// Total occurrences with the given classification.
    pub fn occurrences(&self, classification: Classification) -> usize {
        self.entries
            .values()
            .filter(|entry| entry.classification == classification)
            .map(|entry| entry.count)
            .sum()
    }

    /// Entries ordered for presentation: most used first, ties by key.
    pub fn ranked(&self) -> Vec<(&str, &TokenUsageEntry)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|(a_key, a), (b_key, b)| {
            b.count.cmp(&a.count).then_with(|| a_key.cmp(b_key))
        });
        ranked
    }

    /// The report as presentation rows: header first, then ranked entries.
    pub fn render_rows(&self) -> Vec<Vec<String>> {
        let header = REPORT_HEADER.iter().map(|cell| cell.to_string()).collect();

        std::iter::once(header)
            .chain(self.ranked().into_iter().map(|(key, entry)| {
                vec![
                    key.to_string(),
                    entry.value.clone(),
                    entry.count.to_string(),
                    entry.classification.label().to_string(),
                ]
            }))
            .collect()
    }
}
