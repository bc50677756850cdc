use utoipa::OpenApi;

/// Main OpenAPI documentation for the customers API.
///
/// Paths of the domain document are nested under `/customers`; the server
/// entry accounts for the `/api` prefix added by `create_router`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customers API",
        description = "CRUD service for customer records"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/customers", api = domain_customers::ApiDoc)
    )
)]
pub struct ApiDoc;
