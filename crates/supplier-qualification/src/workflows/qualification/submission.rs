use serde::{Deserialize, Serialize};

use super::catalog::CriterionCatalog;
use super::domain::{CandidateType, CriterionId, PersistedAnswer};
use super::scoring::{classify, compute_score, Decision};
use super::selection::SelectionState;

/// Submission-time validation failure the user can correct.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("criterion {criterion_id} requires a qualifier answer")]
    MissingQualifier { criterion_id: CriterionId },
}

/// Normalized payload handed to the persistence layer on submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationPayload {
    pub candidate_type: CandidateType,
    pub selections: Vec<PersistedAnswer>,
    pub total_score: u32,
    pub decision: Decision,
}

/// Reject the state when a selected criterion still lacks its qualifier.
///
/// The first offending criterion in catalog order is reported. Whitespace-only answers count
/// as missing.
pub fn validate(state: &SelectionState, catalog: &CriterionCatalog) -> Result<(), SubmissionError> {
    let missing = catalog.list_criteria().iter().find(|criterion| {
        catalog.demands_qualifier(criterion)
            && state.is_selected(&criterion.id)
            && state
                .qualifier(&criterion.id)
                .map_or(true, |answer| answer.trim().is_empty())
    });

    match missing {
        Some(criterion) => Err(SubmissionError::MissingQualifier {
            criterion_id: criterion.id.clone(),
        }),
        None => Ok(()),
    }
}

/// Flatten a state into persisted answers ordered by category, then criterion identifier.
pub fn flatten(state: &SelectionState) -> Vec<PersistedAnswer> {
    state
        .selected_ids()
        .map(|id| PersistedAnswer {
            criterion_id: id.clone(),
            qualifier_answer: state.qualifier(id).map(str::to_string),
        })
        .collect()
}

/// Validate and produce the payload with a freshly computed score and decision.
pub fn submit(
    state: &SelectionState,
    catalog: &CriterionCatalog,
) -> Result<EvaluationPayload, SubmissionError> {
    validate(state, catalog)?;

    let score = compute_score(state, catalog);
    Ok(EvaluationPayload {
        candidate_type: state.candidate_type(),
        selections: flatten(state),
        total_score: score.total,
        decision: classify(score.total),
    })
}
