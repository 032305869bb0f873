mod aggregate;
mod policy;

pub use aggregate::compute_score;
pub use policy::{
    classify, Decision, APPROVED_MIN_SCORE, APPROVED_WITH_RESERVE_MIN_SCORE, EXCELLENT_MIN_SCORE,
    MAX_TOTAL_SCORE,
};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Category, CriterionId};

/// Points contributed by one selected criterion, kept for audit trails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub criterion_id: CriterionId,
    pub category: Category,
    pub name: String,
    pub score: u32,
}

/// Derived score of a selection state; never stored on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub per_category: BTreeMap<Category, u32>,
    pub total: u32,
    pub components: Vec<ScoreComponent>,
}

impl ScoreSnapshot {
    pub fn category_score(&self, category: &Category) -> u32 {
        self.per_category.get(category).copied().unwrap_or(0)
    }
}
