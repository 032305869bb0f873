use super::common::*;
use crate::workflows::qualification::domain::{CandidateType, EvaluationId, PersistedAnswer};
use crate::workflows::qualification::repository::{EvaluationRepository, RepositoryError};
use crate::workflows::qualification::{
    Decision, EvaluationServiceError, SkipReason, SubmissionError, SupplierEvaluationService,
};
use std::sync::Arc;

fn service(repository: Arc<MemoryRepository>) -> SupplierEvaluationService<MemoryRepository> {
    SupplierEvaluationService::new(repository, scenario_catalog())
}

#[test]
fn submit_stores_normalized_payload() {
    let repository = Arc::new(MemoryRepository::default());
    let service = service(repository.clone());
    let state = build_state(
        service.engine(),
        CandidateType::LegalEntity,
        &[("P1", true), ("W1", true), ("T1", true)],
    );

    let record = service
        .submit("Metrologia Sul Ltda", &state)
        .expect("submission stored");

    assert!(record.evaluation_id.0.starts_with("eval-"));
    assert_eq!(record.payload.total_score, 40);
    assert_eq!(record.payload.decision, Decision::ApprovedWithReserve);
    let stored = repository
        .fetch(&record.evaluation_id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored, record);

    let view = record.summary_view();
    assert_eq!(view.decision, "APPROVED_WITH_RESERVE");
    assert_eq!(view.candidate_type, "legal_entity");
    assert!(view.decision_rationale.contains("approved with reserve"));
}

#[test]
fn submit_propagates_missing_qualifier() {
    let repository = Arc::new(MemoryRepository::default());
    let service = service(repository.clone());
    let state = build_state(service.engine(), CandidateType::LegalEntity, &[("Q3", true)]);

    match service.submit("Calibra Tech", &state) {
        Err(EvaluationServiceError::Submission(SubmissionError::MissingQualifier {
            criterion_id,
        })) => assert_eq!(criterion_id, id("Q3")),
        other => panic!("expected missing qualifier, got {other:?}"),
    }
    assert!(repository.list(10).expect("list succeeds").is_empty());
}

#[test]
fn resume_rebuilds_the_submitted_state() {
    let repository = Arc::new(MemoryRepository::default());
    let service = service(repository);
    let engine = service.engine();
    let state = build_state(engine, CandidateType::LegalEntity, &[("Q1", true), ("W2", true)]);
    let state = engine
        .set_qualifier(&state, &id("Q1"), "accreditation 0042")
        .expect("qualifier accepted");

    let record = service.submit("Precisa Instrumentos", &state).expect("stored");
    let resumed = service.resume(&record.evaluation_id).expect("resumes");

    assert_eq!(resumed.state, state);
    assert_eq!(resumed.score.total, record.payload.total_score);
    assert_eq!(resumed.decision, record.payload.decision);
}

#[test]
fn resume_ignores_stored_aggregates_and_retired_criteria() {
    let repository = Arc::new(MemoryRepository::default());
    let service = service(repository.clone());
    let state = build_state(service.engine(), CandidateType::LegalEntity, &[("P2", true)]);
    let mut record = service.submit("Legacy Supplier", &state).expect("stored");

    record.payload.total_score = 88;
    record.payload.decision = Decision::Excellent;
    record
        .payload
        .selections
        .push(PersistedAnswer::new("RETIRED_CRITERION"));
    repository.overwrite(record.clone());

    let resumed = service.resume(&record.evaluation_id).expect("resumes");

    assert_eq!(resumed.score.total, 5);
    assert_eq!(resumed.decision, Decision::NotApproved);
    assert_eq!(resumed.skipped.len(), 1);
    assert_eq!(resumed.skipped[0].reason, SkipReason::UnknownCriterion);
}

#[test]
fn resubmit_replaces_selections() {
    let repository = Arc::new(MemoryRepository::default());
    let service = service(repository.clone());
    let engine = service.engine();
    let state = build_state(engine, CandidateType::LegalEntity, &[("P2", true)]);
    let record = service.submit("Ajuste Fino", &state).expect("stored");

    let resumed = service.resume(&record.evaluation_id).expect("resumes");
    let edited = build_state(engine, CandidateType::LegalEntity, &[("P1", true), ("W1", true)]);
    assert_ne!(resumed.state, edited);

    let updated = service
        .resubmit(&record.evaluation_id, &edited)
        .expect("resubmission stored");

    assert_eq!(updated.evaluation_id, record.evaluation_id);
    assert_eq!(updated.payload.total_score, 25);
    let stored = service.get(&record.evaluation_id).expect("record present");
    assert_eq!(stored.payload, updated.payload);
}

#[test]
fn get_propagates_not_found() {
    let service = service(Arc::new(MemoryRepository::default()));

    match service.get(&EvaluationId("missing".to_string())) {
        Err(EvaluationServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
    match service.resume(&EvaluationId("missing".to_string())) {
        Err(EvaluationServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}
