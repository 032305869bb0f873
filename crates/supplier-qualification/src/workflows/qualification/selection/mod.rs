mod rules;
mod state;

pub use rules::{toggle, toggle_by_id};
pub use state::SelectionState;

use super::domain::{CandidateType, CriterionId};

/// Recoverable selection failures for user-supplied criterion references.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("criterion {0} is not in the catalog")]
    UnknownCriterion(CriterionId),
    #[error("criterion {criterion_id} does not apply to {candidate_type} candidates")]
    NotApplicable {
        criterion_id: CriterionId,
        candidate_type: CandidateType,
    },
    #[error("criterion {0} is not currently selected")]
    NotSelected(CriterionId),
    #[error("criterion {0} does not take a qualifier answer")]
    QualifierNotAccepted(CriterionId),
}
