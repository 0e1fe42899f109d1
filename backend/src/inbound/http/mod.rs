//! HTTP inbound adapter exposing REST endpoints.

pub mod assets;
pub mod clients;
pub mod error;
pub mod health;
pub mod hello;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::{ApiResult, json_error_handler};
