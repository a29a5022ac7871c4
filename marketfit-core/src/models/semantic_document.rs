use serde::{Deserialize, Serialize};

/// A country/sector summary searched by the vector store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticDocument {
    pub country_code: String,
    /// Free-form sector label as produced upstream; matched case-insensitively.
    pub sector: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}
