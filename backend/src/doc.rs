//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (clients, assets,
//!   root greeting, health)
//! - **Schemas**: Domain type wrappers ([`ClientSchema`], [`AssetSchema`],
//!   [`ErrorSchema`]) that provide OpenAPI definitions without coupling
//!   domain types to the utoipa framework, plus the [`ClientBody`] request
//!   payload
//!
//! The generated specification is served by Swagger UI in debug builds.

use crate::inbound::http::clients::ClientBody;
use crate::inbound::http::schemas::{AssetSchema, ClientSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Client management API",
        description = "HTTP interface for client records and fixed investment assets."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::hello::hello,
        crate::inbound::http::clients::list_clients,
        crate::inbound::http::clients::get_client,
        crate::inbound::http::clients::create_client,
        crate::inbound::http::clients::update_client,
        crate::inbound::http::clients::delete_client,
        crate::inbound::http::assets::list_assets,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ClientSchema, AssetSchema, ErrorSchema, ClientBody)),
    tags(
        (name = "meta", description = "Connectivity checks"),
        (name = "clients", description = "CRUD operations over client records"),
        (name = "assets", description = "Fixed list of investment assets"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // Note: utoipa replaces :: with . in schema names
    const CLIENT_SCHEMA_NAME: &str = "crate.domain.Client";
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_client_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let client_schema = schemas.get(CLIENT_SCHEMA_NAME).expect("Client schema");

        assert_object_schema_has_field(client_schema, "id");
        assert_object_schema_has_field(client_schema, "name");
        assert_object_schema_has_field(client_schema, "email");
        assert_object_schema_has_field(client_schema, "status");
    }

    #[test]
    fn openapi_error_schema_exposes_only_message() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "message");
        match error_schema {
            RefOr::T(Schema::Object(obj)) => {
                assert_eq!(obj.properties.len(), 1, "error body is message-only");
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_registers_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/clients",
            "/clients/{id}",
            "/assets",
            "/health/ready",
            "/health/live",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path '{path}'"
            );
        }
    }
}
