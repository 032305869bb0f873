use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use supplier_qualification::config::QualificationConfig;
use supplier_qualification::workflows::qualification::{
    CandidateType, CatalogError, CategoryTable, CriterionCatalog, EvaluationId, EvaluationRecord,
    EvaluationRepository, RepositoryError,
};
use tracing::info;

#[derive(Default, Clone)]
pub(crate) struct InMemoryEvaluationRepository {
    records: Arc<Mutex<HashMap<EvaluationId, EvaluationRecord>>>,
}

impl EvaluationRepository for InMemoryEvaluationRepository {
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
        let mut records: Vec<EvaluationRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at));
        records.truncate(limit);
        Ok(records)
    }
}

/// Resolve the catalog from a CLI override, the configured path, or the bundled rubric.
pub(crate) fn load_catalog(
    config: &QualificationConfig,
    override_path: Option<PathBuf>,
) -> Result<CriterionCatalog, CatalogError> {
    let table = config.category_table();

    match override_path.or_else(|| config.catalog_path.clone()) {
        Some(path) => {
            info!(path = %path.display(), "loading criteria catalog");
            CriterionCatalog::from_path(path, table)
        }
        None if table == CategoryTable::standard() => Ok(CriterionCatalog::standard()),
        None => CriterionCatalog::new(
            CriterionCatalog::standard().list_criteria().to_vec(),
            table,
        ),
    }
}

pub(crate) fn parse_candidate_type(raw: &str) -> Result<CandidateType, String> {
    raw.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use supplier_qualification::workflows::qualification::{Cardinality, Category};

    fn qualification_config(single_choice: &[&str]) -> QualificationConfig {
        QualificationConfig {
            catalog_path: None,
            single_choice_categories: single_choice.iter().map(|name| name.to_string()).collect(),
            qualifier_categories: vec!["QUALITY".to_string()],
        }
    }

    #[test]
    fn bundled_catalog_honors_category_overrides() {
        let config = qualification_config(&["PRICE"]);

        let catalog = load_catalog(&config, None).expect("catalog loads");

        assert_eq!(
            catalog.cardinality(&Category::new("PRICE")),
            Cardinality::Single
        );
        assert_eq!(
            catalog.cardinality(&Category::new("WARRANTY")),
            Cardinality::Multi
        );
    }

    #[test]
    fn override_path_takes_precedence() {
        let config = qualification_config(&["PRICE"]);

        let result = load_catalog(&config, Some(PathBuf::from("missing/criteria.csv")));

        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn parses_candidate_type_aliases() {
        assert_eq!(
            parse_candidate_type("legal-entity"),
            Ok(CandidateType::LegalEntity)
        );
        assert_eq!(parse_candidate_type("PF"), Ok(CandidateType::NaturalPerson));
        assert!(parse_candidate_type("cooperative").is_err());
    }
}
