//! PostgreSQL persistence adapters built on Diesel.

pub mod diesel_client_repository;
mod models;
pub mod pool;
pub mod schema;

pub use diesel_client_repository::DieselClientRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
