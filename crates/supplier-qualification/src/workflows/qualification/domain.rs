use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier of a scoring criterion, unchanged across catalog reloads.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriterionId(pub String);

impl CriterionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Grouping key for criteria that share a selection rule.
///
/// Names are normalized to trimmed upper case so catalog files and configuration overrides
/// agree on spelling.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub const PRICE: &'static str = "PRICE";
    pub const QUALITY: &'static str = "QUALITY";
    pub const DELIVERY_TIME: &'static str = "DELIVERY_TIME";
    pub const WARRANTY: &'static str = "WARRANTY";
    pub const EXPERIENCE: &'static str = "EXPERIENCE";
    pub const TAX_REGIME: &'static str = "TAX_REGIME";
    pub const PAYMENT_TERMS: &'static str = "PAYMENT_TERMS";

    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Legal nature of the supplier under evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateType {
    LegalEntity,
    NaturalPerson,
}

impl CandidateType {
    pub const fn label(self) -> &'static str {
        match self {
            CandidateType::LegalEntity => "legal_entity",
            CandidateType::NaturalPerson => "natural_person",
        }
    }
}

impl fmt::Display for CandidateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for CandidateType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "legal_entity" | "pj" => Ok(Self::LegalEntity),
            "natural_person" | "pf" => Ok(Self::NaturalPerson),
            other => Err(format!(
                "unknown candidate type '{other}' (expected legal_entity or natural_person)"
            )),
        }
    }
}

/// Candidate types for which a criterion may be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Applicability {
    LegalEntity,
    NaturalPerson,
    Both,
}

impl Applicability {
    pub const fn permits(self, candidate: CandidateType) -> bool {
        matches!(
            (self, candidate),
            (Applicability::Both, _)
                | (Applicability::LegalEntity, CandidateType::LegalEntity)
                | (Applicability::NaturalPerson, CandidateType::NaturalPerson)
        )
    }

    /// Parse catalog spellings, including the `PJ`/`PF`/`AMBOS` codes used by older exports.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "legal_entity" | "pj" => Some(Self::LegalEntity),
            "natural_person" | "pf" => Some(Self::NaturalPerson),
            "both" | "ambos" => Some(Self::Both),
            _ => None,
        }
    }
}

/// Individually selectable qualification fact about a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub category: Category,
    pub name: String,
    pub base_score: u32,
    pub applicability: Applicability,
    pub requires_qualifier: bool,
}

/// Flattened answer as stored by the data-access layer; carries no category information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedAnswer {
    pub criterion_id: CriterionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier_answer: Option<String>,
}

impl PersistedAnswer {
    pub fn new(criterion_id: impl Into<String>) -> Self {
        Self {
            criterion_id: CriterionId::new(criterion_id),
            qualifier_answer: None,
        }
    }

    pub fn with_qualifier(criterion_id: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            criterion_id: CriterionId::new(criterion_id),
            qualifier_answer: Some(answer.into()),
        }
    }
}

/// Identifier wrapper for submitted supplier evaluations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvaluationId(pub String);

impl fmt::Display for EvaluationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
