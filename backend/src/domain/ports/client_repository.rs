//! Port abstraction for client persistence adapters and their errors.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Client, ClientDraft};

/// Persistence failures raised by client repository adapters.
///
/// The closed variant set is decided at the adapter boundary; handlers map
/// variants to statuses without inspecting store-specific error shapes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientRepositoryError {
    /// Repository connection could not be established.
    #[error("client repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("client repository query failed: {message}")]
    Query { message: String },
    /// The referenced client does not exist.
    #[error("client not found")]
    NotFound,
    /// A write collided with an existing unique value on `field`.
    #[error("unique constraint violated on {field}")]
    UniqueViolation { field: String },
}

impl ClientRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a unique-violation error naming the conflicting field.
    pub fn unique_violation(field: impl Into<String>) -> Self {
        Self::UniqueViolation {
            field: field.into(),
        }
    }
}

/// Store gateway for client records.
///
/// Each operation is one round trip; adapters add no retries, batching, or
/// caching. Absence on reads is `Ok(None)`, never an error; absence on
/// mutations is [`ClientRepositoryError::NotFound`].
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Return all client records in store-defined order.
    async fn find_all(&self) -> Result<Vec<Client>, ClientRepositoryError>;

    /// Fetch a client by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, ClientRepositoryError>;

    /// Persist a new client under a freshly generated id.
    async fn create(&self, draft: ClientDraft) -> Result<Client, ClientRepositoryError>;

    /// Replace name, email, and status of the client matching `id`.
    /// The id itself is immutable.
    async fn update(&self, id: Uuid, draft: ClientDraft)
        -> Result<Client, ClientRepositoryError>;

    /// Remove the client matching `id`.
    async fn delete(&self, id: Uuid) -> Result<(), ClientRepositoryError>;
}

/// In-memory repository used when no database is configured, and by handler
/// tests. Enforces the same email uniqueness the PostgreSQL adapter gets
/// from its unique constraint.
#[derive(Debug, Default)]
pub struct InMemoryClientRepository {
    clients: Mutex<HashMap<Uuid, Client>>,
}

impl InMemoryClientRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, Client>>, ClientRepositoryError>
    {
        self.clients
            .lock()
            .map_err(|_| ClientRepositoryError::query("client table lock poisoned"))
    }
}

fn email_taken_by_other(clients: &HashMap<Uuid, Client>, email: &str, id: Option<Uuid>) -> bool {
    clients
        .values()
        .any(|client| client.email().as_ref() == email && Some(client.id()) != id)
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn find_all(&self) -> Result<Vec<Client>, ClientRepositoryError> {
        let clients = self.lock()?;
        Ok(clients.values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, ClientRepositoryError> {
        let clients = self.lock()?;
        Ok(clients.get(&id).cloned())
    }

    async fn create(&self, draft: ClientDraft) -> Result<Client, ClientRepositoryError> {
        let mut clients = self.lock()?;
        if email_taken_by_other(&clients, draft.email().as_ref(), None) {
            return Err(ClientRepositoryError::unique_violation("email"));
        }
        let client = Client::new(Uuid::new_v4(), draft);
        clients.insert(client.id(), client.clone());
        Ok(client)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: ClientDraft,
    ) -> Result<Client, ClientRepositoryError> {
        let mut clients = self.lock()?;
        if !clients.contains_key(&id) {
            return Err(ClientRepositoryError::NotFound);
        }
        if email_taken_by_other(&clients, draft.email().as_ref(), Some(id)) {
            return Err(ClientRepositoryError::unique_violation("email"));
        }
        let client = Client::new(id, draft);
        clients.insert(id, client.clone());
        Ok(client)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ClientRepositoryError> {
        let mut clients = self.lock()?;
        match clients.remove(&id) {
            Some(_) => Ok(()),
            None => Err(ClientRepositoryError::NotFound),
        }
    }
}
