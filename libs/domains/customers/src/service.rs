use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{CustomerError, CustomerResult};
use crate::models::{Customer, CustomerInput};
use crate::repository::CustomerRepository;

/// Service layer for Customer business logic
///
/// Validates input before any repository call and normalises repository
/// failures into [`CustomerError`]. `get`, `update` and `delete` treat every
/// failed lookup as [`CustomerError::CustomerNotFound`]; the cause is only
/// logged. `list`, `search` and `count` pass repository errors through.
#[derive(Clone)]
pub struct CustomerService<R: CustomerRepository> {
    repository: Arc<R>,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Create a new CustomerService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new customer after validating the input
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_customer(&self, input: CustomerInput) -> CustomerResult<Customer> {
        if let Err(errors) = input.validate() {
            tracing::debug!(%errors, "Rejected customer");
            return Err(CustomerError::InvalidCustomer);
        }

        self.repository.create(input).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create customer");
            CustomerError::DatabaseOperation
        })
    }

    /// Get a customer by ID
    #[instrument(skip(self))]
    pub async fn get_customer(&self, id: u32) -> CustomerResult<Customer> {
        self.repository.get_by_id(id).await.map_err(|e| {
            tracing::warn!(error = %e, "Customer lookup failed");
            CustomerError::CustomerNotFound
        })
    }

    /// List all customers, ordered by ID
    #[instrument(skip(self))]
    pub async fn list_customers(&self) -> CustomerResult<Vec<Customer>> {
        Ok(self.repository.get_all().await?)
    }

    /// Search customers whose name contains `name`, ignoring case
    #[instrument(skip(self))]
    pub async fn search_customers(&self, name: &str) -> CustomerResult<Vec<Customer>> {
        if name.is_empty() {
            return Err(CustomerError::InvalidCustomer);
        }

        Ok(self.repository.get_by_name(name).await?)
    }

    /// Replace customer `id`; the id in the path is authoritative.
    #[instrument(skip(self, input))]
    pub async fn update_customer(&self, id: u32, input: CustomerInput) -> CustomerResult<Customer> {
        if let Err(errors) = input.validate() {
            tracing::debug!(%errors, "Rejected customer");
            return Err(CustomerError::InvalidCustomer);
        }

        self.get_customer(id).await?;

        self.repository.update(id, input).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to update customer");
            CustomerError::DatabaseOperation
        })
    }

    /// Delete a customer that must exist
    #[instrument(skip(self))]
    pub async fn delete_customer(&self, id: u32) -> CustomerResult<()> {
        self.get_customer(id).await?;

        self.repository.delete(id).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to delete customer");
            CustomerError::DatabaseOperation
        })
    }

    /// Count all customers
    #[instrument(skip(self))]
    pub async fn count_customers(&self) -> CustomerResult<u64> {
        Ok(self.repository.count().await?)
    }
}
