//! Domain ports: abstraction boundaries between application logic and
//! external collaborators.

mod client_repository;

pub use client_repository::{ClientRepository, ClientRepositoryError, InMemoryClientRepository};
