use supplier_qualification::workflows::qualification::{
    Applicability, Cardinality, CatalogError, Category, CategoryTable, CriterionCatalog,
    CriterionId,
};

#[test]
fn bundled_csv_matches_standard_catalog() {
    let data = include_bytes!("../data/standard_criteria.csv");

    let imported = CriterionCatalog::from_reader(&data[..], CategoryTable::standard())
        .expect("bundled catalog imports");
    let standard = CriterionCatalog::standard();

    assert_eq!(imported.list_criteria(), standard.list_criteria());
    assert_eq!(imported.categories(), standard.categories());
}

#[test]
fn import_normalizes_values_and_aliases() {
    let csv = "id,category,name,base_score,applicability,requires_qualifier\n\
C1, quality ,Accredited lab,6,PJ,TRUE\n\
C2,price,Lowest bid,15,ambos,\n\
C3,Tax_Regime,Individual,10,natural-person,no\n";

    let catalog = CriterionCatalog::from_reader(csv.as_bytes(), CategoryTable::standard())
        .expect("catalog imports");

    let lab = catalog
        .get(&CriterionId::new("C1"))
        .expect("C1 present");
    assert_eq!(lab.category, Category::new("QUALITY"));
    assert_eq!(lab.applicability, Applicability::LegalEntity);
    assert!(lab.requires_qualifier);
    assert!(catalog.demands_qualifier(lab));

    let bid = catalog
        .get(&CriterionId::new("C2"))
        .expect("C2 present");
    assert_eq!(bid.applicability, Applicability::Both);
    assert!(!bid.requires_qualifier);

    assert_eq!(
        catalog.cardinality(&Category::new("TAX_REGIME")),
        Cardinality::Single
    );
    assert_eq!(catalog.by_category().len(), 3);
}

#[test]
fn import_rejects_unknown_applicability() {
    let csv = "id,category,name,base_score,applicability,requires_qualifier\n\
C1,PRICE,Lowest bid,15,cooperative,false\n";

    match CriterionCatalog::from_reader(csv.as_bytes(), CategoryTable::standard()) {
        Err(CatalogError::UnknownApplicability {
            criterion_id,
            value,
        }) => {
            assert_eq!(criterion_id, CriterionId::new("C1"));
            assert_eq!(value, "cooperative");
        }
        other => panic!("expected applicability error, got {other:?}"),
    }
}

#[test]
fn import_rejects_malformed_rows_and_duplicates() {
    let bad_score = "id,category,name,base_score,applicability,requires_qualifier\n\
C1,PRICE,Lowest bid,fifteen,both,false\n";
    assert!(matches!(
        CriterionCatalog::from_reader(bad_score.as_bytes(), CategoryTable::standard()),
        Err(CatalogError::Csv(_))
    ));

    let duplicate = "id,category,name,base_score,applicability,requires_qualifier\n\
C1,PRICE,Lowest bid,15,both,false\n\
C1,WARRANTY,Long warranty,15,both,false\n";
    assert!(matches!(
        CriterionCatalog::from_reader(duplicate.as_bytes(), CategoryTable::standard()),
        Err(CatalogError::DuplicateCriterion(_))
    ));
}

#[test]
fn from_path_reports_missing_files() {
    let result = CriterionCatalog::from_path(
        "does/not/exist/criteria.csv",
        CategoryTable::standard(),
    );

    assert!(matches!(result, Err(CatalogError::Io(_))));
}
