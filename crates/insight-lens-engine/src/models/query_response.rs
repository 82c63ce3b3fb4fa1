use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid query response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

/// A `/query` response from the analysis backend.
///
/// Legacy responses omit `conversational` and carry separate insight and
/// recommendation lists; conversational responses put everything in
/// `answer` using the inline markup the parser understands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    #[serde(default)]
    pub conversational: bool,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub data_citations: Vec<String>,
}

impl QueryResponse {
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// A conversational response carrying only `answer`.
    pub fn conversational(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            conversational: true,
            ..Self::default()
        }
    }
}
