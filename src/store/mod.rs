//! Persistence layer — libSQL-backed local preference storage.

pub mod libsql_backend;
pub mod migrations;
pub mod traits;

pub use libsql_backend::LibSqlBackend;
pub use traits::PreferenceStore;
