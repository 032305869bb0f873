use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::super::domain::{Applicability, Category, Criterion, CriterionId};
use super::CatalogError;

pub(super) fn parse_criteria<R: Read>(reader: R) -> Result<Vec<Criterion>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut criteria = Vec::new();

    for record in csv_reader.deserialize::<CriterionRow>() {
        let row = record?;
        let applicability = Applicability::parse(&row.applicability).ok_or_else(|| {
            CatalogError::UnknownApplicability {
                criterion_id: CriterionId::new(row.id.clone()),
                value: row.applicability.clone(),
            }
        })?;

        criteria.push(Criterion {
            id: CriterionId::new(row.id),
            category: Category::new(&row.category),
            name: row.name,
            base_score: row.base_score,
            applicability,
            requires_qualifier: row.requires_qualifier,
        });
    }

    Ok(criteria)
}

#[derive(Debug, Deserialize)]
struct CriterionRow {
    id: String,
    category: String,
    name: String,
    base_score: u32,
    applicability: String,
    #[serde(default, deserialize_with = "flag")]
    requires_qualifier: bool,
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim).map(str::to_ascii_lowercase).as_deref() {
        None | Some("") | Some("false") | Some("no") | Some("0") => Ok(false),
        Some("true") | Some("yes") | Some("1") => Ok(true),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected true/false for requires_qualifier, found '{other}'"
        ))),
    }
}
