use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::super::catalog::CriterionCatalog;
use super::super::domain::{CandidateType, Category, CriterionId};
use super::SelectionError;

/// Criteria currently chosen for one evaluation session.
///
/// Values are snapshots: every transition returns a new state and leaves the receiver intact.
/// Categories with no selection are absent rather than mapped to an empty set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    candidate_type: CandidateType,
    selections: BTreeMap<Category, BTreeSet<CriterionId>>,
    qualifiers: BTreeMap<CriterionId, String>,
}

impl SelectionState {
    pub fn new(candidate_type: CandidateType) -> Self {
        Self {
            candidate_type,
            selections: BTreeMap::new(),
            qualifiers: BTreeMap::new(),
        }
    }

    /// Switching candidate type discards every selection because applicability depends on it.
    pub fn with_candidate_type(&self, candidate_type: CandidateType) -> Self {
        if candidate_type == self.candidate_type {
            self.clone()
        } else {
            Self::new(candidate_type)
        }
    }

    pub fn candidate_type(&self) -> CandidateType {
        self.candidate_type
    }

    pub fn selections(&self) -> &BTreeMap<Category, BTreeSet<CriterionId>> {
        &self.selections
    }

    pub fn selected(&self, category: &Category) -> Vec<&CriterionId> {
        self.selections
            .get(category)
            .map(|ids| ids.iter().collect())
            .unwrap_or_default()
    }

    pub fn is_selected(&self, id: &CriterionId) -> bool {
        self.selections.values().any(|ids| ids.contains(id))
    }

    pub fn selected_ids(&self) -> impl Iterator<Item = &CriterionId> {
        self.selections.values().flatten()
    }

    pub fn qualifier(&self, id: &CriterionId) -> Option<&str> {
        self.qualifiers.get(id).map(String::as_str)
    }

    pub fn qualifiers(&self) -> &BTreeMap<CriterionId, String> {
        &self.qualifiers
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Record the free-text qualifier for a selected criterion that demands one.
    ///
    /// Blank text clears the answer.
    pub fn set_qualifier(
        &self,
        catalog: &CriterionCatalog,
        id: &CriterionId,
        answer: impl Into<String>,
    ) -> Result<Self, SelectionError> {
        let criterion = catalog
            .get(id)
            .ok_or_else(|| SelectionError::UnknownCriterion(id.clone()))?;

        if !self.is_selected(id) {
            return Err(SelectionError::NotSelected(id.clone()));
        }
        if !catalog.demands_qualifier(criterion) {
            return Err(SelectionError::QualifierNotAccepted(id.clone()));
        }

        let answer = answer.into();
        let mut next = self.clone();
        if answer.trim().is_empty() {
            next.qualifiers.remove(id);
        } else {
            next.qualifiers.insert(id.clone(), answer);
        }
        Ok(next)
    }

    pub(super) fn replace_category(&mut self, category: &Category, id: CriterionId) {
        self.selections.insert(category.clone(), BTreeSet::from([id]));
    }

    pub(super) fn clear_category(&mut self, category: &Category) {
        self.selections.remove(category);
    }

    pub(super) fn insert_selection(&mut self, category: &Category, id: CriterionId) {
        self.selections
            .entry(category.clone())
            .or_default()
            .insert(id);
    }

    pub(super) fn remove_selection(&mut self, category: &Category, id: &CriterionId) {
        if let Some(ids) = self.selections.get_mut(category) {
            ids.remove(id);
            if ids.is_empty() {
                self.selections.remove(category);
            }
        }
    }

    /// Drop qualifier answers whose criterion is no longer selected.
    pub(super) fn prune_qualifiers(&mut self) {
        let selections = &self.selections;
        self.qualifiers
            .retain(|id, _| selections.values().any(|ids| ids.contains(id)));
    }
}
