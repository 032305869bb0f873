use crate::infra::{load_catalog, parse_candidate_type};
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use supplier_qualification::config::AppConfig;
use supplier_qualification::error::AppError;
use supplier_qualification::workflows::qualification::{
    CandidateType, Category, EvaluationPayload, PersistedAnswer, QualificationEngine,
    SkippedAnswer,
};
use tracing::warn;

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Only list criteria selectable for this candidate type (legal_entity or natural_person)
    #[arg(long, value_parser = parse_candidate_type)]
    pub(crate) candidate_type: Option<CandidateType>,
    /// CSV catalog to use instead of the configured or bundled one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON file holding the persisted answers (`[{"criterion_id": ..., "qualifier_answer": ...}]`)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Candidate type the evaluation was recorded for
    #[arg(long, value_parser = parse_candidate_type)]
    pub(crate) candidate_type: CandidateType,
    /// CSV catalog to use instead of the configured or bundled one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct EvaluationReport {
    payload: EvaluationPayload,
    per_category: BTreeMap<Category, u32>,
    decision_rationale: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<SkippedAnswer>,
}

pub(crate) fn run_catalog(args: CatalogArgs, config: &AppConfig) -> Result<(), AppError> {
    let catalog = load_catalog(&config.qualification, args.catalog)?;

    for (category, criteria) in catalog.by_category() {
        let visible: Vec<_> = criteria
            .into_iter()
            .filter(|criterion| {
                args.candidate_type
                    .map_or(true, |candidate| criterion.applicability.permits(candidate))
            })
            .collect();
        if visible.is_empty() {
            continue;
        }

        println!("{} ({})", category, catalog.cardinality(category).label());
        for criterion in visible {
            let qualifier = if catalog.demands_qualifier(criterion) {
                ", qualifier required"
            } else {
                ""
            };
            println!(
                "  - {:<28} {:>2} pts  {}{}",
                criterion.id, criterion.base_score, criterion.name, qualifier
            );
        }
    }

    Ok(())
}

pub(crate) fn run_evaluate(args: EvaluateArgs, config: &AppConfig) -> Result<(), AppError> {
    let catalog = load_catalog(&config.qualification, args.catalog)?;
    let engine = QualificationEngine::new(catalog);

    let raw = std::fs::read_to_string(&args.answers)?;
    let answers: Vec<PersistedAnswer> = serde_json::from_str(&raw)?;

    let rebuilt = engine.reconstruct(&answers, args.candidate_type);
    for skipped in &rebuilt.skipped {
        warn!(
            criterion_id = %skipped.criterion_id,
            reason = ?skipped.reason,
            "ignoring persisted answer"
        );
    }

    let payload = engine.submit(&rebuilt.state)?;
    let report = EvaluationReport {
        decision_rationale: payload.decision.summary(payload.total_score),
        payload,
        per_category: rebuilt.score.per_category,
        skipped: rebuilt.skipped,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
