//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; Diesel uses them for
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Client records.
    ///
    /// `email` carries the `clients_email_key` unique constraint; violations
    /// surface as conflicts at the API boundary.
    clients (id) {
        /// Primary key: UUID v4 identifier, generated by the application.
        id -> Uuid,
        /// Client name.
        name -> Varchar,
        /// Unique email address.
        email -> Varchar,
        /// Active (`true`) or inactive (`false`).
        status -> Bool,
    }
}
