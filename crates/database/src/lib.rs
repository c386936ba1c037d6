//! # Calculadora Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! history storage backend. It is the system's "permanent archive."
//!
//! ## Architectural Principles
//!
//! - **Injected Collaborator:** The rest of the application only sees the
//!   `HistoryStore` trait. The PostgreSQL implementation and the in-memory
//!   implementation are interchangeable, so tests and the demo mode can run
//!   without a database server.
//! - **Asynchronous & Pooled:** All operations are asynchronous, and the
//!   PostgreSQL store uses a connection pool (`PgPool`) for concurrent access.
//! - **Runtime-Bound Queries:** Queries use the runtime `sqlx` API so the
//!   crate compiles without a live database schema.
//!
//! ## Public API
//!
//! - `connect`: The async function to establish the database connection pool.
//! - `run_migrations`: A utility to apply database migrations, ensuring the schema is up-to-date.
//! - `HistoryStore`: The storage contract the engine records to and queries from.
//! - `PgHistoryStore` / `MemoryHistoryStore`: the two implementations.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod memory;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use memory::MemoryHistoryStore;
pub use repository::{HistoryFilter, HistoryRecord, HistorySort, HistoryStore, PgHistoryStore};
