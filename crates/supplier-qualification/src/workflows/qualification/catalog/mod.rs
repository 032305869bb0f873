mod parser;
mod standard;
mod table;

pub use table::{Cardinality, CategoryTable, QUALIFIER_CATEGORIES, SINGLE_CHOICE_CATEGORIES};

use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use super::domain::{CandidateType, Category, Criterion, CriterionId};

/// Errors raised while building a criterion catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read criteria catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid criteria CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("criterion {0} appears more than once in the catalog")]
    DuplicateCriterion(CriterionId),
    #[error("criterion {criterion_id} has unknown applicability '{value}'")]
    UnknownApplicability {
        criterion_id: CriterionId,
        value: String,
    },
}

/// Read-only list of scoring criteria with category rules resolved at load time.
#[derive(Debug, Clone)]
pub struct CriterionCatalog {
    criteria: Vec<Criterion>,
    index: HashMap<CriterionId, usize>,
    cardinalities: BTreeMap<Category, Cardinality>,
    table: CategoryTable,
}

impl CriterionCatalog {
    pub fn new(criteria: Vec<Criterion>, table: CategoryTable) -> Result<Self, CatalogError> {
        if let Some(duplicate) = first_duplicate(&criteria) {
            return Err(CatalogError::DuplicateCriterion(duplicate.clone()));
        }
        Ok(Self::assemble(criteria, table))
    }

    /// Built-in supplier qualification rubric. Its identifiers are unique.
    pub fn standard() -> Self {
        Self::assemble(standard::standard_criteria(), CategoryTable::standard())
    }

    fn assemble(criteria: Vec<Criterion>, table: CategoryTable) -> Self {
        let index = criteria
            .iter()
            .enumerate()
            .map(|(position, criterion)| (criterion.id.clone(), position))
            .collect();
        let cardinalities = resolve_cardinalities(&criteria, &table);

        Self {
            criteria,
            index,
            cardinalities,
            table,
        }
    }

    /// Load criteria from CSV with columns
    /// `id,category,name,base_score,applicability,requires_qualifier`.
    pub fn from_reader<R: Read>(reader: R, table: CategoryTable) -> Result<Self, CatalogError> {
        let criteria = parser::parse_criteria(reader)?;
        Self::new(criteria, table)
    }

    pub fn from_path<P: AsRef<Path>>(path: P, table: CategoryTable) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, table)
    }

    pub fn list_criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn by_category(&self) -> BTreeMap<&Category, Vec<&Criterion>> {
        let mut grouped: BTreeMap<&Category, Vec<&Criterion>> = BTreeMap::new();
        for criterion in &self.criteria {
            grouped.entry(&criterion.category).or_default().push(criterion);
        }
        grouped
    }

    pub fn get(&self, id: &CriterionId) -> Option<&Criterion> {
        self.index.get(id).map(|position| &self.criteria[*position])
    }

    pub fn cardinality(&self, category: &Category) -> Cardinality {
        self.cardinalities
            .get(category)
            .copied()
            .unwrap_or_else(|| self.table.cardinality(category))
    }

    pub fn is_qualifier_eligible(&self, category: &Category) -> bool {
        self.table.is_qualifier_eligible(category)
    }

    /// Whether selecting the criterion obliges the user to provide qualifier text.
    pub fn demands_qualifier(&self, criterion: &Criterion) -> bool {
        criterion.requires_qualifier && self.is_qualifier_eligible(&criterion.category)
    }

    pub fn applicable_to(&self, candidate: CandidateType) -> Vec<&Criterion> {
        self.criteria
            .iter()
            .filter(|criterion| criterion.applicability.permits(candidate))
            .collect()
    }

    pub fn categories(&self) -> Vec<&Category> {
        self.cardinalities.keys().collect()
    }
}

fn first_duplicate(criteria: &[Criterion]) -> Option<&CriterionId> {
    let mut seen = HashSet::with_capacity(criteria.len());
    criteria
        .iter()
        .map(|criterion| &criterion.id)
        .find(|id| !seen.insert(*id))
}

fn resolve_cardinalities(
    criteria: &[Criterion],
    table: &CategoryTable,
) -> BTreeMap<Category, Cardinality> {
    criteria
        .iter()
        .map(|criterion| {
            (
                criterion.category.clone(),
                table.cardinality(&criterion.category),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::qualification::domain::Applicability;

    fn criterion(id: &str, category: &str) -> Criterion {
        Criterion {
            id: CriterionId::new(id),
            category: Category::new(category),
            name: id.to_string(),
            base_score: 5,
            applicability: Applicability::Both,
            requires_qualifier: false,
        }
    }

    #[test]
    fn rejects_duplicate_criterion_ids() {
        let criteria = vec![criterion("P1", "PRICE"), criterion("P1", "WARRANTY")];

        match CriterionCatalog::new(criteria, CategoryTable::standard()) {
            Err(CatalogError::DuplicateCriterion(id)) => assert_eq!(id.as_str(), "P1"),
            other => panic!("expected duplicate criterion error, got {other:?}"),
        }
    }

    #[test]
    fn standard_rubric_has_unique_ids() {
        let criteria = standard::standard_criteria();

        assert_eq!(first_duplicate(&criteria), None);
        assert_eq!(
            CriterionCatalog::standard().list_criteria(),
            CriterionCatalog::new(criteria, CategoryTable::standard())
                .expect("catalog builds")
                .list_criteria()
        );
    }

    #[test]
    fn unknown_categories_resolve_to_multi_choice() {
        let catalog = CriterionCatalog::new(
            vec![criterion("S1", "SUSTAINABILITY"), criterion("P1", "price")],
            CategoryTable::standard(),
        )
        .expect("catalog builds");

        assert_eq!(
            catalog.cardinality(&Category::new("SUSTAINABILITY")),
            Cardinality::Multi
        );
        assert_eq!(
            catalog.cardinality(&Category::new("NEVER_SEEN")),
            Cardinality::Multi
        );
        assert_eq!(catalog.cardinality(&Category::new("PRICE")), Cardinality::Single);
    }

    #[test]
    fn standard_catalog_covers_every_configured_category() {
        let catalog = CriterionCatalog::standard();
        let categories: Vec<&str> = catalog
            .categories()
            .into_iter()
            .map(Category::as_str)
            .collect();

        for name in SINGLE_CHOICE_CATEGORIES.iter().chain(QUALIFIER_CATEGORIES.iter()) {
            assert!(categories.contains(name), "missing category {name}");
        }
        assert!(catalog
            .by_category()
            .iter()
            .filter(|(category, _)| catalog.cardinality(category) == Cardinality::Single)
            .all(|(_, criteria)| criteria.iter().map(|c| c.base_score).max() == Some(15)));
    }

    #[test]
    fn applicable_to_filters_by_candidate_type() {
        let catalog = CriterionCatalog::standard();

        let natural = catalog.applicable_to(CandidateType::NaturalPerson);
        assert!(natural
            .iter()
            .any(|criterion| criterion.id.as_str() == "TAX_INDIVIDUAL_TAXPAYER"));
        assert!(!natural
            .iter()
            .any(|criterion| criterion.id.as_str() == "TAX_SIMPLIFIED_REGIME"));

        let legal = catalog.applicable_to(CandidateType::LegalEntity);
        assert!(!legal
            .iter()
            .any(|criterion| criterion.id.as_str() == "TAX_INDIVIDUAL_TAXPAYER"));
    }
}
