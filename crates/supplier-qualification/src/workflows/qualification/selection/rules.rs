use super::super::catalog::{Cardinality, CriterionCatalog};
use super::super::domain::{Category, Criterion, CriterionId};
use super::state::SelectionState;
use super::SelectionError;

/// Apply one user toggle and return the resulting state.
///
/// Single-choice categories hold at most one criterion: selecting replaces the category's
/// contents and deselecting clears it. Multi-choice categories add or remove the criterion.
/// Qualifier answers of criteria that end up deselected are discarded; newly selected
/// criteria start without one.
///
/// # Panics
///
/// Passing a criterion outside `category`, or one not applicable to the state's candidate
/// type, is a caller bug and panics.
pub fn toggle(
    catalog: &CriterionCatalog,
    state: &SelectionState,
    category: &Category,
    criterion: &Criterion,
    is_selected: bool,
) -> SelectionState {
    assert_eq!(
        &criterion.category, category,
        "criterion {} belongs to category {}, not {}",
        criterion.id, criterion.category, category
    );
    assert!(
        criterion.applicability.permits(state.candidate_type()),
        "criterion {} is not selectable for {} candidates",
        criterion.id,
        state.candidate_type()
    );

    let mut next = state.clone();
    match (catalog.cardinality(category), is_selected) {
        (Cardinality::Single, true) => next.replace_category(category, criterion.id.clone()),
        (Cardinality::Single, false) => next.clear_category(category),
        (Cardinality::Multi, true) => next.insert_selection(category, criterion.id.clone()),
        (Cardinality::Multi, false) => next.remove_selection(category, &criterion.id),
    }
    next.prune_qualifiers();
    next
}

/// Resolve a criterion by identifier and toggle it, reporting bad references as errors.
pub fn toggle_by_id(
    catalog: &CriterionCatalog,
    state: &SelectionState,
    id: &CriterionId,
    is_selected: bool,
) -> Result<SelectionState, SelectionError> {
    let criterion = catalog
        .get(id)
        .ok_or_else(|| SelectionError::UnknownCriterion(id.clone()))?;

    if !criterion.applicability.permits(state.candidate_type()) {
        return Err(SelectionError::NotApplicable {
            criterion_id: id.clone(),
            candidate_type: state.candidate_type(),
        });
    }

    Ok(toggle(
        catalog,
        state,
        &criterion.category,
        criterion,
        is_selected,
    ))
}
