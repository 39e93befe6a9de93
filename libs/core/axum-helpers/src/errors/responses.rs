//! Reusable OpenAPI response types for consistent API documentation.

use super::Problem;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "type": "https://httpstatuses.com/400",
        "title": "One or more validation errors occurred.",
        "status": 400,
        "instance": "/api/products",
        "traceId": "0b06869db48347af95083b7a7fcd8971",
        "errors": {
            "name": ["Name is required"],
            "price": ["Price must be greater than zero"]
        }
    })
)]
pub struct ValidationProblemResponse(pub Problem);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid JSON body or domain failure",
    content_type = "application/json",
    example = json!({
        "type": "https://httpstatuses.com/400",
        "title": "Invalid JSON in request body",
        "status": 400,
        "detail": "expected value at line 1 column 1",
        "instance": "/api/products",
        "traceId": "0b06869db48347af95083b7a7fcd8971"
    })
)]
pub struct BadRequestProblemResponse(pub Problem);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - missing or invalid bearer token",
    content_type = "application/json",
    example = json!({
        "type": "https://httpstatuses.com/401",
        "title": "No token provided",
        "status": 401,
        "instance": "/api/products",
        "traceId": "0b06869db48347af95083b7a7fcd8971"
    })
)]
pub struct UnauthorizedResponse(pub Problem);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "type": "https://httpstatuses.com/500",
        "title": "An unexpected error occurred",
        "status": 500,
        "instance": "/api/products",
        "traceId": "0b06869db48347af95083b7a7fcd8971"
    })
)]
pub struct InternalServerErrorResponse(pub Problem);
