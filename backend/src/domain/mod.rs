//! Domain primitives and aggregates.
//!
//! Strongly typed entities used by the HTTP and persistence layers. Types
//! are immutable; invariants and serialization contracts are documented on
//! each type.

pub mod asset;
pub mod client;
pub mod error;
pub mod ports;

pub use self::asset::{Asset, FIXED_ASSETS};
pub use self::client::{Client, ClientDraft, ClientName, ClientValidationError, EmailAddress};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
