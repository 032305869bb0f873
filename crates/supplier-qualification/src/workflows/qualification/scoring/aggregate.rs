use super::super::catalog::CriterionCatalog;
use super::super::selection::SelectionState;
use super::{ScoreComponent, ScoreSnapshot};

/// Sum base scores of the selected criteria per category and overall.
///
/// Identifiers missing from the catalog are ignored; a reload may briefly leave the state
/// ahead of or behind the catalog. Sums saturate at `u32::MAX`.
pub fn compute_score(state: &SelectionState, catalog: &CriterionCatalog) -> ScoreSnapshot {
    let mut snapshot = ScoreSnapshot::default();

    for (category, ids) in state.selections() {
        for id in ids {
            let Some(criterion) = catalog.get(id) else {
                continue;
            };

            let category_total = snapshot.per_category.entry(category.clone()).or_insert(0);
            *category_total = category_total.saturating_add(criterion.base_score);
            snapshot.total = snapshot.total.saturating_add(criterion.base_score);
            snapshot.components.push(ScoreComponent {
                criterion_id: criterion.id.clone(),
                category: category.clone(),
                name: criterion.name.clone(),
                score: criterion.base_score,
            });
        }
    }

    snapshot
}
