use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError, IdPath, JsonBody, QueryPairs,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::models::{CountResponse, Customer, CustomerInput, SearchQuery};
use crate::repository::CustomerRepository;
use crate::service::CustomerService;

pub const NAME_NOT_PROVIDED: &str = "name not provided";
pub const FAILED_TO_CREATE: &str = "failed to create customer";
pub const FAILED_TO_FETCH_ONE: &str = "failed to fetch customer";
pub const FAILED_TO_FETCH_MANY: &str = "failed to fetch customers";
pub const FAILED_TO_UPDATE: &str = "failed to update customer";
pub const FAILED_TO_DELETE: &str = "failed to delete customer";
pub const FAILED_TO_COUNT: &str = "failed to count customers";

type SharedService<R> = State<Arc<CustomerService<R>>>;

/// OpenAPI documentation for the Customers API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_customers,
        create_customer,
        count_customers,
        search_customers,
        get_customer,
        update_customer,
        delete_customer,
    ),
    components(
        schemas(Customer, CustomerInput, CountResponse),
        responses(NotFoundResponse, BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = entity::Model::TAG, description = "Customer management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the customer router; mount it under `/customers`.
pub fn router<R: CustomerRepository + 'static>(service: CustomerService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route("/count", get(count_customers))
        .route("/search", get(search_customers))
        .route(
            "/{id}",
            get(get_customer)
                .put(update_customer)
                .delete(delete_customer),
        )
        .with_state(shared_service)
}

/// List all customers
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All customers", body = Vec<Customer>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_customers<R: CustomerRepository>(
    State(service): SharedService<R>,
) -> Result<Json<Vec<Customer>>, AppError> {
    let customers = service
        .list_customers()
        .await
        .map_err(|e| e.into_app_error(FAILED_TO_FETCH_MANY))?;
    Ok(Json(customers))
}

/// Create a customer
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CustomerInput,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_customer<R: CustomerRepository>(
    State(service): SharedService<R>,
    JsonBody(input): JsonBody<CustomerInput>,
) -> Result<impl IntoResponse, AppError> {
    let customer = service
        .create_customer(input)
        .await
        .map_err(|e| e.into_app_error(FAILED_TO_CREATE))?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// Count customers
#[utoipa::path(
    get,
    path = "/count",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "Number of customers", body = CountResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn count_customers<R: CustomerRepository>(
    State(service): SharedService<R>,
) -> Result<Json<CountResponse>, AppError> {
    let count = service
        .count_customers()
        .await
        .map_err(|e| e.into_app_error(FAILED_TO_COUNT))?;
    Ok(Json(CountResponse { count }))
}

/// Search customers by name (case-insensitive substring)
///
/// A repeated `name` parameter uses its first value.
#[utoipa::path(
    get,
    path = "/search",
    tag = entity::Model::TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching customers", body = Vec<Customer>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_customers<R: CustomerRepository>(
    State(service): SharedService<R>,
    query: QueryPairs,
) -> Result<Json<Vec<Customer>>, AppError> {
    let Some(name) = query.first("name").filter(|name| !name.is_empty()) else {
        return Err(AppError::BadRequest(NAME_NOT_PROVIDED.to_string()));
    };

    let customers = service
        .search_customers(name)
        .await
        .map_err(|e| e.into_app_error(FAILED_TO_FETCH_MANY))?;
    Ok(Json(customers))
}

/// Get a customer by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = u32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_customer<R: CustomerRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
) -> Result<Json<Customer>, AppError> {
    let customer = service
        .get_customer(id)
        .await
        .map_err(|e| e.into_app_error(FAILED_TO_FETCH_ONE))?;
    Ok(Json(customer))
}

/// Replace a customer
#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = u32, Path, description = "Customer ID")
    ),
    request_body = CustomerInput,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_customer<R: CustomerRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<CustomerInput>,
) -> Result<Json<Customer>, AppError> {
    let customer = service
        .update_customer(id, input)
        .await
        .map_err(|e| e.into_app_error(FAILED_TO_UPDATE))?;
    Ok(Json(customer))
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = u32, Path, description = "Customer ID")
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_customer<R: CustomerRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    service
        .delete_customer(id)
        .await
        .map_err(|e| e.into_app_error(FAILED_TO_DELETE))?;
    Ok(StatusCode::NO_CONTENT)
}
