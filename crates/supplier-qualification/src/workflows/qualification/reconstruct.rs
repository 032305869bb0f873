use serde::{Deserialize, Serialize};

use super::catalog::CriterionCatalog;
use super::domain::{CandidateType, CriterionId, PersistedAnswer};
use super::scoring::{classify, compute_score, Decision, ScoreSnapshot};
use super::selection::{toggle, SelectionState};

/// Why a persisted answer did not make it back into the selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    UnknownCriterion,
    NotApplicable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedAnswer {
    pub criterion_id: CriterionId,
    pub reason: SkipReason,
}

/// Selection state rebuilt from persisted answers, with freshly computed aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconstruction {
    pub state: SelectionState,
    pub score: ScoreSnapshot,
    pub decision: Decision,
    pub skipped: Vec<SkippedAnswer>,
}

/// Rebuild an evaluation by replaying every persisted answer as a selection toggle.
///
/// Replaying through [`toggle`] keeps single-choice categories intact even when historical
/// data holds several answers for one of them: the last answer wins. Answers referencing
/// retired criteria, or criteria not applicable to `candidate_type`, are reported in
/// [`Reconstruction::skipped`].
pub fn reconstruct(
    answers: &[PersistedAnswer],
    catalog: &CriterionCatalog,
    candidate_type: CandidateType,
) -> Reconstruction {
    let mut skipped = Vec::new();

    let selected = answers
        .iter()
        .fold(SelectionState::new(candidate_type), |state, answer| {
            match catalog.get(&answer.criterion_id) {
                None => {
                    skipped.push(SkippedAnswer {
                        criterion_id: answer.criterion_id.clone(),
                        reason: SkipReason::UnknownCriterion,
                    });
                    state
                }
                Some(criterion) if !criterion.applicability.permits(candidate_type) => {
                    skipped.push(SkippedAnswer {
                        criterion_id: answer.criterion_id.clone(),
                        reason: SkipReason::NotApplicable,
                    });
                    state
                }
                Some(criterion) => toggle(catalog, &state, &criterion.category, criterion, true),
            }
        });

    let state = answers.iter().fold(selected, |state, answer| {
        match answer
            .qualifier_answer
            .as_deref()
            .filter(|text| !text.trim().is_empty())
        {
            Some(text) => state
                .set_qualifier(catalog, &answer.criterion_id, text)
                .unwrap_or(state),
            None => state,
        }
    });

    let score = compute_score(&state, catalog);
    let decision = classify(score.total);

    Reconstruction {
        state,
        score,
        decision,
        skipped,
    }
}
