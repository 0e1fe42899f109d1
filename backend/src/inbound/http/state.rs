//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O. The repository is
//! injected at construction; nothing is attached to the server instance or
//! read from ambient globals.

use std::sync::Arc;

use crate::domain::ports::ClientRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub clients: Arc<dyn ClientRepository>,
}

impl HttpState {
    /// Construct state around a client repository implementation.
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }
}
