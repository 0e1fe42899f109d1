//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Client`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Client)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ClientSchema {
    /// Stable record identifier, assigned by the server.
    #[schema(value_type = String, format = "uuid", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Client name.
    #[schema(value_type = String, example = "Ana")]
    name: String,
    /// Unique email address.
    #[schema(value_type = String, example = "ana@x.com")]
    email: String,
    /// Active (`true`) or inactive (`false`).
    status: bool,
}

/// OpenAPI schema for [`crate::domain::Asset`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Asset)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct AssetSchema {
    /// Asset display name.
    #[schema(example = "Ação PETR4")]
    name: String,
    /// Current value.
    #[schema(example = 35.50)]
    value: f64,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Every failure response carries this single-field body.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Human-readable message returned to clients.
    #[schema(example = "Cliente não encontrado.")]
    message: String,
}
