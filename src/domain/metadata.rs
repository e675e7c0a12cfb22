use serde::{Deserialize, Serialize};

use super::category::Category;

pub const SUMMARY_MAX_CHARS: usize = 250;

/// Inferred metadata of a document: produced once per request by the
/// metadata inferencer, immutable afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub category: Category,
    pub entities: Vec<String>,
    pub summary: String,
    pub contains_financials: bool,
}

impl DocumentMetadata {
    /// Constructs metadata with its invariants enforced: `entities` holds no
    /// duplicates (first occurrence wins, order preserved) and `summary` is
    /// cut to [`SUMMARY_MAX_CHARS`] characters on a char boundary.
    pub fn new(
        category: Category,
        entities: Vec<String>,
        summary: String,
        contains_financials: bool,
    ) -> Self {
        let mut unique = Vec::with_capacity(entities.len());
        for entity in entities {
            if !unique.contains(&entity) {
                unique.push(entity);
            }
        }

        let summary = match summary.char_indices().nth(SUMMARY_MAX_CHARS) {
            Some((offset, _)) => summary[..offset].to_string(),
            None => summary,
        };

        Self {
            category,
            entities: unique,
            summary,
            contains_financials,
        }
    }
}
