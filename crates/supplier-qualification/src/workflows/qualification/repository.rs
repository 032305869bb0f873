use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::EvaluationId;
use super::submission::EvaluationPayload;

/// Stored evaluation: the normalized payload plus bookkeeping metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub evaluation_id: EvaluationId,
    pub supplier_name: String,
    pub payload: EvaluationPayload,
    pub submitted_at: DateTime<Utc>,
}

impl EvaluationRecord {
    pub fn decision_rationale(&self) -> String {
        self.payload.decision.summary(self.payload.total_score)
    }

    pub fn summary_view(&self) -> EvaluationSummaryView {
        EvaluationSummaryView {
            evaluation_id: self.evaluation_id.clone(),
            supplier_name: self.supplier_name.clone(),
            candidate_type: self.payload.candidate_type.label(),
            total_score: self.payload.total_score,
            decision: self.payload.decision.label(),
            decision_rationale: self.decision_rationale(),
        }
    }
}

/// Storage abstraction owned by the data-access layer.
pub trait EvaluationRepository: Send + Sync {
    fn insert(&self, record: EvaluationRecord) -> Result<EvaluationRecord, RepositoryError>;
    fn update(&self, record: EvaluationRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &EvaluationId) -> Result<Option<EvaluationRecord>, RepositoryError>;
    fn list(&self, limit: usize) -> Result<Vec<EvaluationRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Flattened view of a stored evaluation for listings and CLI output.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationSummaryView {
    pub evaluation_id: EvaluationId,
    pub supplier_name: String,
    pub candidate_type: &'static str,
    pub total_score: u32,
    pub decision: &'static str,
    pub decision_rationale: String,
}
