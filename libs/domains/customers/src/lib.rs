//! Customers Domain
//!
//! CRUD over a single `customers` table, layered the same way as every
//! domain crate in the workspace.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP decoding, id parsing, status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, existence checks, error normalisation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Storage access (trait + Postgres / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Customer, CustomerInput, validation rules
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_customers::{
//!     handlers,
//!     repository::InMemoryCustomerRepository,
//!     service::CustomerService,
//! };
//!
//! let repository = InMemoryCustomerRepository::new();
//! let service = CustomerService::new(repository);
//!
//! // Mount under /customers
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CustomerError, CustomerResult, RepositoryError, RepositoryResult};
pub use handlers::ApiDoc;
pub use models::{CountResponse, Customer, CustomerInput, SearchQuery};
pub use postgres::PgCustomerRepository;
pub use repository::{CustomerRepository, InMemoryCustomerRepository};
pub use service::CustomerService;
