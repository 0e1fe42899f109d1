//! Diesel-backed implementation of the client repository port.
//!
//! Translates port operations into Diesel queries over the async connection
//! pool and maps every Diesel failure onto the closed
//! [`ClientRepositoryError`] set before it leaves this module.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{ClientRepository, ClientRepositoryError};
use crate::domain::{Client, ClientDraft};

use super::models::{ClientChanges, ClientRow, NewClientRow};
use super::pool::{DbPool, PoolError};
use super::schema::clients;

/// Client repository backed by PostgreSQL via Diesel.
#[derive(Clone)]
pub struct DieselClientRepository {
    pool: DbPool,
}

impl DieselClientRepository {
    /// Create a repository using the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ClientRepositoryError {
    ClientRepositoryError::connection(error.to_string())
}

/// Extract the violated column from a unique-violation error.
///
/// Postgres reports the constraint rather than the column for unique indexes,
/// so fall back from `column_name` to the constraint and message text. The
/// email constraint is named `clients_email_key` in the migrations.
fn unique_violation_field(
    info: &(dyn diesel::result::DatabaseErrorInformation + Send + Sync),
) -> String {
    if let Some(column) = info.column_name() {
        return column.to_owned();
    }
    let constraint = info.constraint_name().unwrap_or_default();
    if constraint.contains("email") || info.message().contains("email") {
        return "email".to_owned();
    }
    "unknown".to_owned()
}

fn map_diesel_error(error: DieselError) -> ClientRepositoryError {
    match error {
        DieselError::NotFound => ClientRepositoryError::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            ClientRepositoryError::unique_violation(unique_violation_field(info.as_ref()))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            ClientRepositoryError::connection(info.message().to_owned())
        }
        other => {
            tracing::debug!(error = %other, "unclassified diesel error");
            ClientRepositoryError::query(other.to_string())
        }
    }
}

#[async_trait]
impl ClientRepository for DieselClientRepository {
    async fn find_all(&self) -> Result<Vec<Client>, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ClientRow> = clients::table
            .select(ClientRow::as_select())
            .order(clients::name.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(Client::try_from).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ClientRow> = clients::table
            .find(id)
            .select(ClientRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(Client::try_from).transpose()
    }

    async fn create(&self, draft: ClientDraft) -> Result<Client, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: ClientRow = diesel::insert_into(clients::table)
            .values(NewClientRow::from_draft(Uuid::new_v4(), &draft))
            .returning(ClientRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Client::try_from(row)
    }

    async fn update(&self, id: Uuid, draft: ClientDraft) -> Result<Client, ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: ClientRow = diesel::update(clients::table.find(id))
            .set(ClientChanges::from_draft(&draft))
            .returning(ClientRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Client::try_from(row)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ClientRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(clients::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(ClientRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn database_error(kind: DatabaseErrorKind, message: &str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(message.to_owned()))
    }

    #[rstest]
    fn not_found_maps_to_port_not_found() {
        assert_eq!(
            map_diesel_error(DieselError::NotFound),
            ClientRepositoryError::NotFound
        );
    }

    #[rstest]
    fn unique_violation_on_email_constraint_names_the_field() {
        let error = database_error(
            DatabaseErrorKind::UniqueViolation,
            "duplicate key value violates unique constraint \"clients_email_key\"",
        );

        assert_eq!(
            map_diesel_error(error),
            ClientRepositoryError::UniqueViolation {
                field: "email".to_owned()
            }
        );
    }

    #[rstest]
    fn unique_violation_without_email_hint_is_unknown() {
        let error = database_error(
            DatabaseErrorKind::UniqueViolation,
            "duplicate key value violates unique constraint \"clients_pkey\"",
        );

        assert_eq!(
            map_diesel_error(error),
            ClientRepositoryError::UniqueViolation {
                field: "unknown".to_owned()
            }
        );
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let error = database_error(DatabaseErrorKind::ClosedConnection, "server closed");

        assert_eq!(
            map_diesel_error(error),
            ClientRepositoryError::Connection {
                message: "server closed".to_owned()
            }
        );
    }

    #[rstest]
    fn other_database_errors_map_to_query_errors() {
        let error = database_error(DatabaseErrorKind::ForeignKeyViolation, "fk broken");

        assert!(matches!(
            map_diesel_error(error),
            ClientRepositoryError::Query { .. }
        ));
    }

    #[rstest]
    fn pool_failures_map_to_connection_errors() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));

        assert!(matches!(mapped, ClientRepositoryError::Connection { .. }));
        assert!(mapped.to_string().contains("timed out"));
    }
}
