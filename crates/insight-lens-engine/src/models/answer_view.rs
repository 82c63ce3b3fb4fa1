use serde::Serialize;

use crate::parsing::{blocks::RenderNode, parse_answer};

use super::QueryResponse;

/// What the presentation layer should show for one query.
///
/// Conversational answers are parsed into render nodes. Legacy answers keep
/// their separate lists and never reach the parser. A blank conversational
/// answer is shown as the empty prompt state without parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum AnswerView {
    Empty,
    Conversational {
        nodes: Vec<RenderNode>,
        citations: Vec<String>,
    },
    Legacy {
        answer: String,
        insights: Vec<String>,
        recommendations: Vec<String>,
        citations: Vec<String>,
    },
}

impl AnswerView {
    pub fn from_response(resp: &QueryResponse) -> Self {
        if !resp.conversational {
            log::debug!(
                "legacy response: {} insights, {} recommendations",
                resp.insights.len(),
                resp.recommendations.len()
            );
            return Self::Legacy {
                answer: resp.answer.clone(),
                insights: resp.insights.clone(),
                recommendations: resp.recommendations.clone(),
                citations: resp.data_citations.clone(),
            };
        }

        if resp.answer.trim().is_empty() {
            log::debug!("conversational response with blank answer");
            return Self::Empty;
        }

        Self::Conversational {
            nodes: parse_answer(&resp.answer).nodes,
            citations: resp.data_citations.clone(),
        }
    }

    /// Treats bare text as a conversational answer without citations.
    pub fn from_raw(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::Empty;
        }
        Self::Conversational {
            nodes: parse_answer(raw).nodes,
            citations: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn citations(&self) -> &[String] {
        match self {
            Self::Empty => &[],
            Self::Conversational { citations, .. } | Self::Legacy { citations, .. } => citations,
        }
    }
}
