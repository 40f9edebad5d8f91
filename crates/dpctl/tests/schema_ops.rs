mod common;

use common::FakeWarehouse;
use dpctl::{
    DataProduct, DeleteOutcome, MetastoreType, SchemaRef, Target, catalog_exists, delete,
    provision, schema_exists,
};

fn product() -> DataProduct {
    DataProduct {
        platform: "p".to_string(),
        domain: "d".to_string(),
        name: "my-prod".to_string(),
        owner: "team@example.com".to_string(),
        description: "Sales figures".to_string(),
    }
}

fn unity() -> Target {
    Target::new(&product(), "dev", MetastoreType::Unity)
}

fn hive() -> Target {
    Target::new(&product(), "dev", MetastoreType::Hive)
}

#[tokio::test]
async fn test_catalog_exists_exact_match() {
    let warehouse = FakeWarehouse::new()
        .with_catalog("main")
        .with_catalog("p_d_dev_old");

    assert!(catalog_exists(&warehouse, "main").await.unwrap());
    assert!(!catalog_exists(&warehouse, "p_d_dev").await.unwrap());
    assert_eq!(warehouse.statements(), vec!["SHOW CATALOGS", "SHOW CATALOGS"]);
}

#[tokio::test]
async fn test_schema_exists_scopes_by_metastore() {
    let warehouse = FakeWarehouse::new()
        .with_catalog("p_d_dev")
        .with_schema(Some("p_d_dev"), "my_prod")
        .with_schema(None, "p_d_my_prod");

    assert!(
        schema_exists(&warehouse, "p_d_dev", "my_prod", MetastoreType::Unity)
            .await
            .unwrap()
    );
    assert!(
        !schema_exists(&warehouse, "p_d_dev", "p_d_my_prod", MetastoreType::Unity)
            .await
            .unwrap()
    );
    assert!(
        schema_exists(&warehouse, "", "p_d_my_prod", MetastoreType::Hive)
            .await
            .unwrap()
    );
    assert_eq!(
        warehouse.statements(),
        vec![
            "SHOW SCHEMAS IN `p_d_dev`",
            "SHOW SCHEMAS IN `p_d_dev`",
            "SHOW SCHEMAS",
        ]
    );
}

#[tokio::test]
async fn test_provision_unity_creates_catalog_and_schema() {
    let warehouse = FakeWarehouse::new().with_catalog("main");

    let report = provision(&warehouse, &product(), &unity()).await.unwrap();

    assert!(report.created_catalog);
    assert_eq!(report.target.schema().to_string(), "p_d_dev.my_prod");
    assert!(warehouse.has_catalog("p_d_dev"));
    assert!(warehouse.has_schema(Some("p_d_dev"), "my_prod"));

    let ddl = warehouse.ddl();
    assert_eq!(ddl.len(), 2);
    assert_eq!(ddl[0], "CREATE CATALOG IF NOT EXISTS `p_d_dev`");
    assert!(ddl[1].starts_with("CREATE SCHEMA IF NOT EXISTS `p_d_dev`.`my_prod` COMMENT 'Sales figures'"));
}

#[tokio::test]
async fn test_provision_twice_is_idempotent() {
    let warehouse = FakeWarehouse::new();

    let first = provision(&warehouse, &product(), &unity()).await.unwrap();
    let second = provision(&warehouse, &product(), &unity()).await.unwrap();

    assert!(first.created_catalog);
    assert!(!second.created_catalog);
    assert!(warehouse.has_schema(Some("p_d_dev"), "my_prod"));

    // Second run skips the catalog and reissues only the guarded schema statement.
    let ddl = warehouse.ddl();
    assert_eq!(ddl.len(), 3);
    assert!(ddl[2].starts_with("CREATE SCHEMA IF NOT EXISTS"));
}

#[tokio::test]
async fn test_provision_hive_skips_catalogs() {
    let warehouse = FakeWarehouse::new();

    let report = provision(&warehouse, &product(), &hive()).await.unwrap();

    assert!(!report.created_catalog);
    assert!(warehouse.has_schema(None, "p_d_my_prod"));
    assert!(
        warehouse
            .statements()
            .iter()
            .all(|s| !s.contains("CATALOG"))
    );
}

#[tokio::test]
async fn test_provision_failure_keeps_created_catalog() {
    let warehouse = FakeWarehouse::new().failing_on("CREATE SCHEMA");

    let err = provision(&warehouse, &product(), &unity()).await.unwrap_err();

    assert!(matches!(err, dpctl::Error::Statement { .. }));
    assert!(warehouse.has_catalog("p_d_dev"));
    assert!(!warehouse.has_schema(Some("p_d_dev"), "my_prod"));
}

#[tokio::test]
async fn test_delete_unity_missing_catalog() {
    let warehouse = FakeWarehouse::new().with_catalog("main");

    let outcome = delete(&warehouse, &unity()).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::CatalogMissing("p_d_dev".to_string()));
    assert_eq!(warehouse.statements(), vec!["SHOW CATALOGS"]);
    assert_eq!(
        outcome.to_string(),
        "Catalog 'p_d_dev' does not exist. Nothing to delete."
    );
}

#[tokio::test]
async fn test_delete_unity_missing_schema() {
    let warehouse = FakeWarehouse::new().with_catalog("p_d_dev");

    let outcome = delete(&warehouse, &unity()).await.unwrap();

    assert_eq!(
        outcome,
        DeleteOutcome::SchemaMissing(SchemaRef::qualified("p_d_dev", "my_prod"))
    );
    assert!(warehouse.ddl().is_empty());
}

#[tokio::test]
async fn test_delete_unity_drops_schema() {
    let warehouse = FakeWarehouse::new()
        .with_catalog("p_d_dev")
        .with_schema(Some("p_d_dev"), "my_prod")
        .with_schema(Some("p_d_dev"), "other");

    let outcome = delete(&warehouse, &unity()).await.unwrap();

    assert_eq!(
        outcome,
        DeleteOutcome::Dropped(SchemaRef::qualified("p_d_dev", "my_prod"))
    );
    assert_eq!(
        warehouse.ddl(),
        vec!["DROP SCHEMA IF EXISTS `p_d_dev`.`my_prod` CASCADE"]
    );
    assert!(!warehouse.has_schema(Some("p_d_dev"), "my_prod"));
    assert!(warehouse.has_schema(Some("p_d_dev"), "other"));
    assert!(warehouse.has_catalog("p_d_dev"));
}

#[tokio::test]
async fn test_delete_twice_reports_nothing_to_delete() {
    let warehouse = FakeWarehouse::new()
        .with_catalog("p_d_dev")
        .with_schema(Some("p_d_dev"), "my_prod");

    let first = delete(&warehouse, &unity()).await.unwrap();
    let ddl_after_first = warehouse.ddl().len();
    let second = delete(&warehouse, &unity()).await.unwrap();

    assert!(matches!(first, DeleteOutcome::Dropped(_)));
    assert!(matches!(second, DeleteOutcome::SchemaMissing(_)));
    assert_eq!(warehouse.ddl().len(), ddl_after_first);
}

#[tokio::test]
async fn test_delete_hive() {
    let warehouse = FakeWarehouse::new().with_schema(None, "p_d_my_prod");

    let first = delete(&warehouse, &hive()).await.unwrap();
    let second = delete(&warehouse, &hive()).await.unwrap();

    assert_eq!(first, DeleteOutcome::Dropped(SchemaRef::flat("p_d_my_prod")));
    assert_eq!(second, DeleteOutcome::SchemaMissing(SchemaRef::flat("p_d_my_prod")));
    assert_eq!(
        warehouse.ddl(),
        vec!["DROP SCHEMA IF EXISTS `p_d_my_prod` CASCADE"]
    );
}

#[tokio::test]
async fn test_provision_then_delete_round_trip() {
    let warehouse = FakeWarehouse::new();

    provision(&warehouse, &product(), &unity()).await.unwrap();
    let outcome = delete(&warehouse, &unity()).await.unwrap();

    assert!(matches!(outcome, DeleteOutcome::Dropped(_)));
    assert!(!warehouse.has_schema(Some("p_d_dev"), "my_prod"));
}

#[tokio::test]
async fn test_hive_never_touches_catalogs() {
    let warehouse = FakeWarehouse::new().with_schema(None, "p_d_my_prod");

    provision(&warehouse, &product(), &hive()).await.unwrap();
    delete(&warehouse, &hive()).await.unwrap();

    let statements = warehouse.statements();
    assert!(statements.iter().all(|sql| !sql.contains("CATALOG")));
    assert!(statements.iter().all(|sql| !sql.starts_with("SHOW SCHEMAS IN")));
    assert!(statements.iter().any(|sql| sql == "SHOW SCHEMAS"));
}
