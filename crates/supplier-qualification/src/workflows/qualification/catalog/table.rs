use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::super::domain::Category;

/// Categories that allow at most one selected criterion in the supplier rubric.
pub const SINGLE_CHOICE_CATEGORIES: [&str; 6] = [
    Category::PRICE,
    Category::DELIVERY_TIME,
    Category::WARRANTY,
    Category::EXPERIENCE,
    Category::TAX_REGIME,
    Category::PAYMENT_TERMS,
];

/// Categories whose criteria may demand a free-text qualifier.
pub const QUALIFIER_CATEGORIES: [&str; 1] = [Category::QUALITY];

/// Selection cardinality of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    Single,
    Multi,
}

impl Cardinality {
    pub const fn label(self) -> &'static str {
        match self {
            Cardinality::Single => "single choice",
            Cardinality::Multi => "multiple choice",
        }
    }
}

/// Configuration table consulted for every category-aware rule.
///
/// Categories absent from the single-choice set behave as multi-choice, including categories
/// the table has never seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    single_choice: BTreeSet<Category>,
    qualifier_eligible: BTreeSet<Category>,
}

impl CategoryTable {
    pub fn new<S, Q>(single_choice: S, qualifier_eligible: Q) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        Q: IntoIterator,
        Q::Item: AsRef<str>,
    {
        Self {
            single_choice: single_choice.into_iter().map(Category::new).collect(),
            qualifier_eligible: qualifier_eligible.into_iter().map(Category::new).collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new(SINGLE_CHOICE_CATEGORIES, QUALIFIER_CATEGORIES)
    }

    pub fn cardinality(&self, category: &Category) -> Cardinality {
        if self.single_choice.contains(category) {
            Cardinality::Single
        } else {
            Cardinality::Multi
        }
    }

    pub fn is_qualifier_eligible(&self, category: &Category) -> bool {
        self.qualifier_eligible.contains(category)
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::standard()
    }
}
