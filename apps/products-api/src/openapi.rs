//! OpenAPI documentation configuration

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

/// Registers the bearer-token security scheme referenced by protected paths
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "v1",
        description = "Product management API with bearer-token authentication"
    ),
    paths(crate::api::auth::get_token, crate::api::health::health),
    components(schemas(crate::api::auth::TokenResponse)),
    modifiers(&SecurityAddon),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Auth", description = "Token issuance"),
        (name = "Health", description = "Dependency health checks"),
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;
