//! Integration tests for the Postgres customer repository
//!
//! Each test starts its own Postgres container through `test_utils`, so
//! they need Docker and are ignored by default:
//!
//! ```sh
//! cargo test -p domain_customers --test integration_test -- --ignored
//! ```

use domain_customers::*;
use test_utils::{TestDataBuilder, TestDatabase};

fn input(builder: &TestDataBuilder, suffix: &str) -> CustomerInput {
    CustomerInput::new(builder.name("customer", suffix), builder.email(suffix))
        .with_phone(builder.phone())
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_get_customer() {
    let db = TestDatabase::new().await;
    let service = CustomerService::new(PgCustomerRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("pg_create_get");

    let created = service
        .create_customer(input(&builder, "main").with_address("1 Main St"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert!(created.active);
    assert_eq!(created.address.as_deref(), Some("1 Main St"));

    let fetched = service.get_customer(created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.email, builder.email("main"));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_replaces_fields() {
    let db = TestDatabase::new().await;
    let service = CustomerService::new(PgCustomerRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("pg_update");

    let created = service.create_customer(input(&builder, "main")).await.unwrap();
    let updated = service
        .update_customer(
            created.id,
            CustomerInput::new("Renamed Customer", "renamed@example.com").with_active(false),
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Renamed Customer");
    assert_eq!(updated.phone, None);
    assert!(!updated.active);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_missing_rows_are_not_found() {
    let db = TestDatabase::new().await;
    let repo = PgCustomerRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_missing");

    assert!(matches!(
        repo.get_by_id(12345).await,
        Err(RepositoryError::NotFound(12345))
    ));
    assert!(matches!(
        repo.update(12345, input(&builder, "x")).await,
        Err(RepositoryError::NotFound(12345))
    ));
    assert!(matches!(
        repo.delete(12345).await,
        Err(RepositoryError::NotFound(12345))
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_then_get_is_not_found() {
    let db = TestDatabase::new().await;
    let service = CustomerService::new(PgCustomerRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("pg_delete");

    let created = service.create_customer(input(&builder, "main")).await.unwrap();
    service.delete_customer(created.id).await.unwrap();

    assert!(matches!(
        service.get_customer(created.id).await,
        Err(CustomerError::CustomerNotFound)
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_search_is_literal_and_case_insensitive() {
    let db = TestDatabase::new().await;
    let service = CustomerService::new(PgCustomerRepository::new(db.connection()));

    for (name, email) in [
        ("Jane Doe", "jane@example.com"),
        ("John DOE", "john@example.com"),
        ("100% Real", "real@example.com"),
        ("Bob Smith", "bob@example.com"),
    ] {
        service
            .create_customer(CustomerInput::new(name, email))
            .await
            .unwrap();
    }

    let found = service.search_customers("doe").await.unwrap();
    let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Jane Doe", "John DOE"]);

    // wildcards in the needle match themselves only
    let found = service.search_customers("%").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "100% Real");

    assert!(service.search_customers("_").await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_and_count() {
    let db = TestDatabase::new().await;
    let service = CustomerService::new(PgCustomerRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("pg_list_count");

    assert!(service.list_customers().await.unwrap().is_empty());
    assert_eq!(service.count_customers().await.unwrap(), 0);

    service.create_customer(input(&builder, "a")).await.unwrap();
    service.create_customer(input(&builder, "b")).await.unwrap();

    assert_eq!(service.list_customers().await.unwrap().len(), 2);
    assert_eq!(service.count_customers().await.unwrap(), 2);
}
