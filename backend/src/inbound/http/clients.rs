//! Client resource HTTP handlers.
//!
//! ```text
//! GET    /clients
//! GET    /clients/{id}
//! POST   /clients
//! PUT    /clients/{id}
//! DELETE /clients/{id}
//! ```
//!
//! The only branching logic in the application lives here: validate the
//! request shape, issue exactly one repository call, and map the outcome
//! onto the status codes and message strings the frontend expects.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::ClientRepositoryError;
use crate::domain::{Client, ClientDraft, ClientValidationError, Error};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_client_id;
use crate::inbound::http::ApiResult;

/// Request body for `POST /clients` and `PUT /clients/{id}`.
///
/// Example JSON: `{"name":"Ana","email":"ana@x.com","status":true}`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ClientBody {
    pub name: String,
    pub email: String,
    pub status: bool,
}

impl TryFrom<ClientBody> for ClientDraft {
    type Error = ClientValidationError;

    fn try_from(value: ClientBody) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.name, &value.email, value.status)
    }
}

fn validate_body(body: ClientBody) -> Result<ClientDraft, Error> {
    ClientDraft::try_from(body).map_err(|err| Error::invalid_request(err.to_string()))
}

/// Log a store fault and surface the generic per-operation message.
///
/// Internal failure detail never reaches the caller.
fn store_fault(error: &ClientRepositoryError, message: &'static str) -> Error {
    error!(error = %error, "client repository failure");
    Error::internal(message)
}

/// Map a unique violation to 409 only when the conflicting field is `email`.
///
/// Email is currently the only unique field, so any other field falls
/// through to a generic store fault.
fn map_unique_violation(
    error: ClientRepositoryError,
    conflict_message: &'static str,
    fallback: &'static str,
) -> Error {
    match error {
        ClientRepositoryError::UniqueViolation { ref field } if field == "email" => {
            Error::conflict(conflict_message)
        }
        other => store_fault(&other, fallback),
    }
}

/// List all clients.
#[utoipa::path(
    get,
    path = "/clients",
    responses(
        (status = 200, description = "All client records", body = [crate::inbound::http::schemas::ClientSchema]),
        (status = 500, description = "Store fault", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["clients"],
    operation_id = "listClients"
)]
#[get("/clients")]
pub async fn list_clients(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Client>>> {
    let clients = state
        .clients
        .find_all()
        .await
        .map_err(|err| store_fault(&err, "Erro ao buscar clientes."))?;
    Ok(web::Json(clients))
}

/// Fetch one client by id.
#[utoipa::path(
    get,
    path = "/clients/{id}",
    params(("id" = String, Path, format = "uuid", description = "Client identifier")),
    responses(
        (status = 200, description = "Matching client", body = crate::inbound::http::schemas::ClientSchema),
        (status = 400, description = "Malformed id", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "Unknown id", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Store fault", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["clients"],
    operation_id = "getClient"
)]
#[get("/clients/{id}")]
pub async fn get_client(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Client>> {
    let id = parse_client_id(&path.into_inner())?;
    let client = state
        .clients
        .find_by_id(id)
        .await
        .map_err(|err| store_fault(&err, "Erro ao buscar cliente."))?;
    match client {
        Some(client) => Ok(web::Json(client)),
        None => Err(Error::not_found("Cliente não encontrado.")),
    }
}

/// Create a new client.
#[utoipa::path(
    post,
    path = "/clients",
    request_body = ClientBody,
    responses(
        (status = 201, description = "Created client", body = crate::inbound::http::schemas::ClientSchema),
        (status = 400, description = "Validation failure", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 409, description = "Email already registered", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Store fault", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["clients"],
    operation_id = "createClient"
)]
#[post("/clients")]
pub async fn create_client(
    state: web::Data<HttpState>,
    body: web::Json<ClientBody>,
) -> ApiResult<HttpResponse> {
    let draft = validate_body(body.into_inner())?;
    let created = state.clients.create(draft).await.map_err(|err| {
        map_unique_violation(err, "Email já cadastrado.", "Erro ao cadastrar cliente.")
    })?;
    Ok(HttpResponse::Created().json(created))
}

/// Replace an existing client's fields. The id is immutable.
#[utoipa::path(
    put,
    path = "/clients/{id}",
    params(("id" = String, Path, format = "uuid", description = "Client identifier")),
    request_body = ClientBody,
    responses(
        (status = 200, description = "Updated client", body = crate::inbound::http::schemas::ClientSchema),
        (status = 400, description = "Malformed id or body", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "Unknown id", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 409, description = "Email held by another client", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Store fault", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["clients"],
    operation_id = "updateClient"
)]
#[put("/clients/{id}")]
pub async fn update_client(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Json<ClientBody>,
) -> ApiResult<web::Json<Client>> {
    let id = parse_client_id(&path.into_inner())?;
    let draft = validate_body(body.into_inner())?;
    let updated = state
        .clients
        .update(id, draft)
        .await
        .map_err(|err| match err {
            ClientRepositoryError::NotFound => {
                Error::not_found("Cliente não encontrado para atualização.")
            }
            other => map_unique_violation(
                other,
                "Email já cadastrado em outro cliente.",
                "Erro ao atualizar cliente.",
            ),
        })?;
    Ok(web::Json(updated))
}

/// Remove a client.
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    params(("id" = String, Path, format = "uuid", description = "Client identifier")),
    responses(
        (status = 204, description = "Client removed"),
        (status = 400, description = "Malformed id", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "Unknown id", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Store fault", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["clients"],
    operation_id = "deleteClient"
)]
#[delete("/clients/{id}")]
pub async fn delete_client(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_client_id(&path.into_inner())?;
    state
        .clients
        .delete(id)
        .await
        .map_err(|err| match err {
            ClientRepositoryError::NotFound => {
                Error::not_found("Cliente não encontrado para exclusão.")
            }
            other => store_fault(&other, "Erro ao excluir cliente."),
        })?;
    Ok(HttpResponse::NoContent().finish())
}
