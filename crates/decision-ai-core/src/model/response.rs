//! Decision response model and login classification

use super::DecisionStatus;
use serde::{Deserialize, Serialize};

/// Response from the decision API.
///
/// Every field is optional on the wire; nothing is validated beyond the
/// shape. Confidence is expected in 0..=100 but not enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<DecisionStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signals: Option<Vec<String>>,

    /// Opaque token identifying the decision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl DecisionResponse {
    /// Response carrying only a decision
    pub fn with_decision(decision: DecisionStatus) -> Self {
        Self {
            decision: Some(decision),
            ..Self::default()
        }
    }

    /// See [`is_good_login`]
    pub fn is_good_login(&self) -> bool {
        is_good_login(self)
    }
}

/// The admission policy: `allow` and `review` are good logins, `reject`
/// (or a response without a decision) is not.
pub fn is_good_login(response: &DecisionResponse) -> bool {
    matches!(
        response.decision,
        Some(DecisionStatus::Allow) | Some(DecisionStatus::Review)
    )
}
