use crate::infra::InMemoryEvaluationRepository;
use chrono::SecondsFormat;
use clap::Args;
use std::sync::Arc;
use supplier_qualification::error::AppError;
use supplier_qualification::workflows::qualification::{
    Applicability, CandidateType, Category, CategoryTable, Criterion, CriterionCatalog,
    CriterionId, EvaluationRepository, EvaluationServiceError, QualificationEngine,
    SelectionState, SubmissionError, SupplierEvaluationService,
};

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Supplier name recorded on the demo evaluation
    #[arg(long, default_value = "Metrologia Exemplo Ltda")]
    pub(crate) supplier: String,
    /// Skip the edit/resubmit portion of the demo
    #[arg(long)]
    pub(crate) skip_edit: bool,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            supplier: "Metrologia Exemplo Ltda".to_string(),
            skip_edit: false,
        }
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Supplier qualification demo");
    run_toggle_walkthrough()?;
    run_service_walkthrough(args)
}

fn run_toggle_walkthrough() -> Result<(), AppError> {
    println!("\nSelection rules on a three-criterion catalog");
    let catalog = CriterionCatalog::new(
        vec![
            demo_criterion("P1", Category::PRICE, 10, false),
            demo_criterion("P2", Category::PRICE, 5, false),
            demo_criterion("Q1", Category::QUALITY, 8, true),
        ],
        CategoryTable::standard(),
    )?;
    let engine = QualificationEngine::new(catalog);
    let mut state = engine.start(CandidateType::LegalEntity);

    for id in ["P1", "P2", "Q1"] {
        state = engine.toggle_by_id(&state, &CriterionId::new(id), true)?;
        println!(
            "- select {id}: total {} ({})",
            engine.score(&state).total,
            describe(&state)
        );
    }

    match engine.submit(&state) {
        Err(SubmissionError::MissingQualifier { criterion_id }) => {
            println!("- submit rejected: {criterion_id} needs a qualifier answer")
        }
        Ok(payload) => println!("- submit unexpectedly accepted: {}", payload.total_score),
    }

    let state = engine.set_qualifier(&state, &CriterionId::new("Q1"), "ISO cert")?;
    let payload = engine.submit(&state)?;
    println!(
        "- submit accepted after qualifier: {} points -> {}",
        payload.total_score,
        payload.decision.label()
    );
    Ok(())
}

fn run_service_walkthrough(args: DemoArgs) -> Result<(), AppError> {
    println!("\nStandard rubric evaluation for {}", args.supplier);
    let repository = Arc::new(InMemoryEvaluationRepository::default());
    let service = SupplierEvaluationService::new(repository.clone(), CriterionCatalog::standard());
    let engine = service.engine();

    let state = select(
        engine,
        engine.start(CandidateType::LegalEntity),
        &[
            "PRICE_AT_MARKET",
            "DELIVERY_UP_TO_15_DAYS",
            "WARRANTY_UP_TO_12_MONTHS",
            "EXPERIENCE_OVER_5_YEARS",
            "TAX_PRESUMED_PROFIT",
            "PAYMENT_UP_TO_30_DAYS",
            "QUALITY_ISO_17025",
        ],
    )?;
    let state = engine.set_qualifier(
        &state,
        &CriterionId::new("QUALITY_ISO_17025"),
        "Accreditation CAL 0123",
    )?;

    let record = service.submit(args.supplier.as_str(), &state)?;
    let view = record.summary_view();
    println!(
        "- Stored evaluation {} at {}",
        view.evaluation_id,
        record
            .submitted_at
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    println!("  Decision rationale: {}", view.decision_rationale);
    println!("  Score components:");
    for component in engine.score(&state).components {
        println!(
            "    - {} / {}: {} pts",
            component.category, component.name, component.score
        );
    }

    if args.skip_edit {
        return Ok(());
    }

    let resumed = service.resume(&record.evaluation_id)?;
    println!(
        "- Reopened {} for editing: {} answers, {} points",
        record.evaluation_id,
        resumed.state.selected_ids().count(),
        resumed.score.total
    );

    let edited = select(
        engine,
        resumed.state,
        &["PRICE_BELOW_MARKET", "DELIVERY_UP_TO_5_DAYS", "WARRANTY_OVER_12_MONTHS"],
    )?;
    let updated = service.resubmit(&record.evaluation_id, &edited)?;
    println!(
        "- Resubmitted: {}",
        updated.summary_view().decision_rationale
    );

    let stored = repository
        .list(10)
        .map_err(EvaluationServiceError::from)?;
    println!("  Stored evaluations:");
    for record in stored {
        println!("{}", serde_json::to_string_pretty(&record.summary_view())?);
    }

    Ok(())
}

fn select(
    engine: &QualificationEngine,
    state: SelectionState,
    ids: &[&str],
) -> Result<SelectionState, AppError> {
    ids.iter().try_fold(state, |state, id| {
        engine
            .toggle_by_id(&state, &CriterionId::new(*id), true)
            .map_err(AppError::from)
    })
}

fn describe(state: &SelectionState) -> String {
    let selected: Vec<String> = state.selected_ids().map(ToString::to_string).collect();
    if selected.is_empty() {
        "nothing selected".to_string()
    } else {
        format!("selected {}", selected.join(", "))
    }
}

fn demo_criterion(id: &str, category: &str, base_score: u32, requires_qualifier: bool) -> Criterion {
    Criterion {
        id: CriterionId::new(id),
        category: Category::new(category),
        name: format!("Demo criterion {id}"),
        base_score,
        applicability: Applicability::Both,
        requires_qualifier,
    }
}
