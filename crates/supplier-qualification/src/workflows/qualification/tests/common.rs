use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::workflows::qualification::repository::{
    EvaluationRecord, EvaluationRepository, RepositoryError,
};
use crate::workflows::qualification::{
    Applicability, CandidateType, Category, CategoryTable, Criterion, CriterionCatalog,
    CriterionId, EvaluationId, QualificationEngine, SelectionState,
};

pub(super) fn criterion(
    id: &str,
    category: &str,
    base_score: u32,
    applicability: Applicability,
    requires_qualifier: bool,
) -> Criterion {
    Criterion {
        id: CriterionId::new(id),
        category: Category::new(category),
        name: format!("{id} criterion"),
        base_score,
        applicability,
        requires_qualifier,
    }
}

pub(super) fn scenario_criteria() -> Vec<Criterion> {
    vec![
        criterion("P1", "PRICE", 10, Applicability::Both, false),
        criterion("P2", "PRICE", 5, Applicability::Both, false),
        criterion("Q1", "QUALITY", 8, Applicability::Both, true),
        criterion("Q2", "QUALITY", 4, Applicability::Both, false),
        criterion("Q3", "QUALITY", 6, Applicability::LegalEntity, true),
        criterion("W1", "WARRANTY", 15, Applicability::Both, false),
        criterion("W2", "WARRANTY", 10, Applicability::Both, false),
        criterion("T1", "TAX_REGIME", 15, Applicability::LegalEntity, false),
        criterion("T2", "TAX_REGIME", 10, Applicability::NaturalPerson, false),
        criterion("S1", "SUSTAINABILITY", 2, Applicability::Both, true),
        criterion("S2", "SUSTAINABILITY", 3, Applicability::Both, false),
    ]
}

pub(super) fn scenario_catalog() -> CriterionCatalog {
    CriterionCatalog::new(scenario_criteria(), CategoryTable::standard()).expect("catalog builds")
}

pub(super) fn engine() -> QualificationEngine {
    QualificationEngine::new(scenario_catalog())
}

pub(super) fn id(value: &str) -> CriterionId {
    CriterionId::new(value)
}

pub(super) fn category(value: &str) -> Category {
    Category::new(value)
}

/// Toggle a sequence of `(criterion, selected)` pairs starting from an empty state.
pub(super) fn build_state(
    engine: &QualificationEngine,
    candidate_type: CandidateType,
    steps: &[(&str, bool)],
) -> SelectionState {
    steps
        .iter()
        .fold(engine.start(candidate_type), |state, (criterion, selected)| {
            engine
                .toggle_by_id(&state, &id(criterion), *selected)
                .expect("valid toggle")
        })
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<EvaluationId, EvaluationRecord>>>,
}

impl MemoryRepository {
    pub(super) fn overwrite(&self, record: EvaluationRecord) {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.evaluation_id.clone(), record);
    }
}

impl EvaluationRepository for MemoryRepository {
    fn insert(&self, record: EvaluationRecord) -> Result<EvaluationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.evaluation_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.evaluation_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: EvaluationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.evaluation_id) {
            guard.insert(record.evaluation_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &EvaluationId) -> Result<Option<EvaluationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self, limit: usize) -> Result<Vec<EvaluationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().take(limit).cloned().collect())
    }
}
