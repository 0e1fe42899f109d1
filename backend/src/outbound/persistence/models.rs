//! Diesel row models for the `clients` table.
//!
//! Row structs are internal to the persistence layer; the adapter converts
//! them to and from domain types at its boundary.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::ports::ClientRepositoryError;
use crate::domain::{Client, ClientDraft, ClientName, EmailAddress};

use super::schema::clients;

/// Queryable row for client records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = clients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ClientRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: bool,
}

/// Insertable row for new client records.
#[derive(Debug, Insertable)]
#[diesel(table_name = clients)]
pub(crate) struct NewClientRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub status: bool,
}

impl<'a> NewClientRow<'a> {
    pub(crate) fn from_draft(id: Uuid, draft: &'a ClientDraft) -> Self {
        Self {
            id,
            name: draft.name().as_ref(),
            email: draft.email().as_ref(),
            status: draft.status(),
        }
    }
}

/// Changeset replacing the mutable fields of a client record.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = clients)]
pub(crate) struct ClientChanges<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub status: bool,
}

impl<'a> ClientChanges<'a> {
    pub(crate) fn from_draft(draft: &'a ClientDraft) -> Self {
        Self {
            name: draft.name().as_ref(),
            email: draft.email().as_ref(),
            status: draft.status(),
        }
    }
}

impl TryFrom<ClientRow> for Client {
    type Error = ClientRepositoryError;

    fn try_from(row: ClientRow) -> Result<Self, Self::Error> {
        let name = ClientName::new(row.name)
            .map_err(|err| ClientRepositoryError::query(format!("invalid stored name: {err}")))?;
        let email = EmailAddress::new(row.email)
            .map_err(|err| ClientRepositoryError::query(format!("invalid stored email: {err}")))?;
        Ok(Client::new(row.id, ClientDraft::new(name, email, row.status)))
    }
}
