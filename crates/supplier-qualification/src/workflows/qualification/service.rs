use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::catalog::CriterionCatalog;
use super::domain::EvaluationId;
use super::reconstruct::Reconstruction;
use super::repository::{EvaluationRecord, EvaluationRepository, RepositoryError};
use super::selection::SelectionState;
use super::submission::SubmissionError;
use super::QualificationEngine;

/// Service composing the qualification engine with evaluation storage.
pub struct SupplierEvaluationService<R> {
    repository: Arc<R>,
    engine: Arc<QualificationEngine>,
}

static EVALUATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_evaluation_id() -> EvaluationId {
    let id = EVALUATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    EvaluationId(format!("eval-{id:06}"))
}

impl<R> SupplierEvaluationService<R>
where
    R: EvaluationRepository + 'static,
{
    pub fn new(repository: Arc<R>, catalog: CriterionCatalog) -> Self {
        Self {
            repository,
            engine: Arc::new(QualificationEngine::new(catalog)),
        }
    }

    pub fn engine(&self) -> &QualificationEngine {
        &self.engine
    }

    /// Validate a finished selection and store it as a new evaluation.
    pub fn submit(
        &self,
        supplier_name: impl Into<String>,
        state: &SelectionState,
    ) -> Result<EvaluationRecord, EvaluationServiceError> {
        let payload = self.engine.submit(state)?;
        let record = EvaluationRecord {
            evaluation_id: next_evaluation_id(),
            supplier_name: supplier_name.into(),
            payload,
            submitted_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            evaluation_id = %stored.evaluation_id,
            total_score = stored.payload.total_score,
            decision = stored.payload.decision.label(),
            "supplier evaluation submitted"
        );
        Ok(stored)
    }

    /// Rebuild a stored evaluation for editing.
    ///
    /// Stored aggregates are not trusted; any disagreement with the recomputed score is logged.
    pub fn resume(&self, id: &EvaluationId) -> Result<Reconstruction, EvaluationServiceError> {
        let record = self.get(id)?;
        let reconstruction = self
            .engine
            .reconstruct(&record.payload.selections, record.payload.candidate_type);

        for skipped in &reconstruction.skipped {
            warn!(
                evaluation_id = %id,
                criterion_id = %skipped.criterion_id,
                reason = ?skipped.reason,
                "persisted answer skipped during reconstruction"
            );
        }

        if reconstruction.score.total != record.payload.total_score
            || reconstruction.decision != record.payload.decision
        {
            warn!(
                evaluation_id = %id,
                stored_score = record.payload.total_score,
                recomputed_score = reconstruction.score.total,
                stored_decision = record.payload.decision.label(),
                recomputed_decision = reconstruction.decision.label(),
                "stored aggregates disagree with recomputed evaluation"
            );
        }

        Ok(reconstruction)
    }

    /// Replace the selections of an existing evaluation after editing.
    pub fn resubmit(
        &self,
        id: &EvaluationId,
        state: &SelectionState,
    ) -> Result<EvaluationRecord, EvaluationServiceError> {
        let mut record = self.get(id)?;
        record.payload = self.engine.submit(state)?;
        record.submitted_at = Utc::now();

        self.repository.update(record.clone())?;
        info!(
            evaluation_id = %id,
            total_score = record.payload.total_score,
            decision = record.payload.decision.label(),
            "supplier evaluation updated"
        );
        Ok(record)
    }

    pub fn get(&self, id: &EvaluationId) -> Result<EvaluationRecord, EvaluationServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the evaluation service.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationServiceError {
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
