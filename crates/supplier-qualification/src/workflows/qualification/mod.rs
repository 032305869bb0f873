//! Supplier selection and scoring.
//!
//! Entry flow: catalog + user toggles -> [`SelectionState`] -> [`ScoreSnapshot`] -> [`Decision`].
//! Edit flow: persisted answers + catalog -> [`reconstruct`] -> the same state, score, and decision.

pub mod catalog;
pub mod domain;
pub mod reconstruct;
pub mod repository;
pub mod scoring;
pub mod selection;
pub mod service;
pub mod submission;

#[cfg(test)]
mod tests;

pub use catalog::{Cardinality, CatalogError, CategoryTable, CriterionCatalog};
pub use domain::{
    Applicability, CandidateType, Category, Criterion, CriterionId, EvaluationId,
    PersistedAnswer,
};
pub use reconstruct::{Reconstruction, SkipReason, SkippedAnswer};
pub use repository::{
    EvaluationRecord, EvaluationRepository, EvaluationSummaryView, RepositoryError,
};
pub use scoring::{Decision, ScoreComponent, ScoreSnapshot};
pub use selection::{SelectionError, SelectionState};
pub use service::{EvaluationServiceError, SupplierEvaluationService};
pub use submission::{EvaluationPayload, SubmissionError};

/// Stateless engine bundling the catalog with the selection, scoring, and rebuild rules.
#[derive(Debug, Clone)]
pub struct QualificationEngine {
    catalog: CriterionCatalog,
}

impl QualificationEngine {
    pub fn new(catalog: CriterionCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CriterionCatalog {
        &self.catalog
    }

    /// Empty state for a new evaluation session.
    pub fn start(&self, candidate_type: CandidateType) -> SelectionState {
        SelectionState::new(candidate_type)
    }

    pub fn toggle(
        &self,
        state: &SelectionState,
        category: &Category,
        criterion: &Criterion,
        is_selected: bool,
    ) -> SelectionState {
        selection::toggle(&self.catalog, state, category, criterion, is_selected)
    }

    pub fn toggle_by_id(
        &self,
        state: &SelectionState,
        id: &CriterionId,
        is_selected: bool,
    ) -> Result<SelectionState, SelectionError> {
        selection::toggle_by_id(&self.catalog, state, id, is_selected)
    }

    pub fn set_qualifier(
        &self,
        state: &SelectionState,
        id: &CriterionId,
        answer: impl Into<String>,
    ) -> Result<SelectionState, SelectionError> {
        state.set_qualifier(&self.catalog, id, answer)
    }

    pub fn score(&self, state: &SelectionState) -> ScoreSnapshot {
        scoring::compute_score(state, &self.catalog)
    }

    pub fn classify(&self, state: &SelectionState) -> Decision {
        scoring::classify(self.score(state).total)
    }

    pub fn submit(&self, state: &SelectionState) -> Result<EvaluationPayload, SubmissionError> {
        submission::submit(state, &self.catalog)
    }

    pub fn reconstruct(
        &self,
        answers: &[PersistedAnswer],
        candidate_type: CandidateType,
    ) -> Reconstruction {
        reconstruct::reconstruct(answers, &self.catalog, candidate_type)
    }
}
