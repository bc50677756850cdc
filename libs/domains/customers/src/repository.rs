use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{Customer, CustomerInput};

/// Repository trait for Customer persistence
///
/// The only layer that touches storage. Implementations report a missing
/// row as [`RepositoryError::NotFound`] and everything else as
/// [`RepositoryError::Storage`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persist a new customer; the store assigns `id` and timestamps
    async fn create(&self, input: CustomerInput) -> RepositoryResult<Customer>;

    async fn get_by_id(&self, id: u32) -> RepositoryResult<Customer>;

    /// All customers, possibly empty
    async fn get_all(&self) -> RepositoryResult<Vec<Customer>>;

    /// Customers whose name contains `name`, ignoring case
    async fn get_by_name(&self, name: &str) -> RepositoryResult<Vec<Customer>>;

    /// Replace every client-controlled field of customer `id`
    async fn update(&self, id: u32, input: CustomerInput) -> RepositoryResult<Customer>;

    async fn delete(&self, id: u32) -> RepositoryResult<()>;

    async fn count(&self) -> RepositoryResult<u64>;
}

#[derive(Debug, Default)]
struct Store {
    customers: BTreeMap<u32, Customer>,
    last_id: u32,
}

/// In-memory implementation of CustomerRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCustomerRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, input: CustomerInput) -> RepositoryResult<Customer> {
        let mut store = self.store.write().await;

        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Storage("customer id space exhausted".into()))?;
        store.last_id = id;

        let customer = Customer::from_input(id, input, chrono::Utc::now());
        store.customers.insert(id, customer.clone());

        tracing::info!(customer_id = id, "Created customer");
        Ok(customer)
    }

    async fn get_by_id(&self, id: u32) -> RepositoryResult<Customer> {
        let store = self.store.read().await;
        store
            .customers
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Customer>> {
        let store = self.store.read().await;
        Ok(store.customers.values().cloned().collect())
    }

    async fn get_by_name(&self, name: &str) -> RepositoryResult<Vec<Customer>> {
        let needle = name.to_lowercase();
        let store = self.store.read().await;

        Ok(store
            .customers
            .values()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn update(&self, id: u32, input: CustomerInput) -> RepositoryResult<Customer> {
        let mut store = self.store.write().await;
        let customer = store
            .customers
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound(id))?;

        customer.apply(input, chrono::Utc::now());

        tracing::info!(customer_id = id, "Updated customer");
        Ok(customer.clone())
    }

    async fn delete(&self, id: u32) -> RepositoryResult<()> {
        let mut store = self.store.write().await;
        store
            .customers
            .remove(&id)
            .ok_or(RepositoryError::NotFound(id))?;

        tracing::info!(customer_id = id, "Deleted customer");
        Ok(())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let store = self.store.read().await;
        Ok(store.customers.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> CustomerInput {
        CustomerInput::new("Jane Doe", "jane@example.com")
    }

    #[tokio::test]
    async fn test_ids_are_assigned_in_sequence() {
        let repo = InMemoryCustomerRepository::new();
        let first = repo.create(jane()).await.unwrap();
        let second = repo
            .create(CustomerInput::new("John Roe", "john@example.com"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryCustomerRepository::new();
        let first = repo.create(jane()).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let next = repo.create(jane()).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let repo = InMemoryCustomerRepository::new();
        let err = repo.get_by_id(42).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_get_all_returns_empty_list() {
        let repo = InMemoryCustomerRepository::new();
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let repo = InMemoryCustomerRepository::new();
        repo.create(jane()).await.unwrap();
        repo.create(CustomerInput::new("Bob Smith", "bob@example.com"))
            .await
            .unwrap();

        let found = repo.get_by_name("DOE").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Jane Doe");

        assert!(repo.get_by_name("zzz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_created_at() {
        let repo = InMemoryCustomerRepository::new();
        let created = repo.create(jane().with_phone("5551234567")).await.unwrap();

        let updated = repo
            .update(created.id, CustomerInput::new("Janet Doe", "janet@example.com"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Janet Doe");
        assert_eq!(updated.phone, None);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_are_not_found() {
        let repo = InMemoryCustomerRepository::new();
        assert!(matches!(
            repo.update(5, jane()).await.unwrap_err(),
            RepositoryError::NotFound(5)
        ));
        assert!(matches!(
            repo.delete(5).await.unwrap_err(),
            RepositoryError::NotFound(5)
        ));
    }

    #[tokio::test]
    async fn test_count_tracks_creates_and_deletes() {
        let repo = InMemoryCustomerRepository::new();
        let a = repo.create(jane()).await.unwrap();
        repo.create(jane()).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);

        repo.delete(a.id).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
