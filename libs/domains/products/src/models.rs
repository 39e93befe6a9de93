use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

/// Product entity - a persisted product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, generated server-side at creation
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Product colour
    pub colour: String,
    /// Creation timestamp (UTC), immutable after creation
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new product.
///
/// Fields default when absent so that a missing field fails its "required"
/// rule instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub colour: String,
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

impl Validate for CreateProduct {
    /// Rule set for product creation.
    ///
    /// Every rule runs and violations accumulate per field; nothing stops at
    /// the first failing field. Strings are not trimmed, so a whitespace-only
    /// value counts as present.
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.is_empty() {
            errors.add("name", violation("required", "Name is required"));
        }
        if self.name.chars().count() > 100 {
            errors.add(
                "name",
                violation("length", "Name cannot exceed 100 characters"),
            );
        }

        if self.description.is_empty() {
            errors.add(
                "description",
                violation("required", "Description is required"),
            );
        }
        if self.description.chars().count() < 5 {
            errors.add(
                "description",
                violation("length", "Description must be at least 5 characters long"),
            );
        }
        if self.description.chars().count() > 500 {
            errors.add(
                "description",
                violation("length", "Description cannot exceed 500 characters"),
            );
        }

        if self.price == 0.0 {
            errors.add("price", violation("required", "Price is required"));
        }
        if self.price <= 0.0 {
            errors.add(
                "price",
                violation("range", "Price must be greater than zero"),
            );
        }

        if self.colour.is_empty() {
            errors.add("colour", violation("required", "Colour is required"));
        }
        if self.colour.chars().count() > 50 {
            errors.add(
                "colour",
                violation("length", "Colour cannot exceed 50 characters"),
            );
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Product {
    /// Create a new product from a CreateProduct DTO.
    ///
    /// The identifier and the creation timestamp are generated here; the
    /// client never supplies either.
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            price: input.price,
            colour: input.colour,
            created_at: Utc::now(),
        }
    }
}
