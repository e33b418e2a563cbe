pub mod db;
pub mod error;
pub mod org;
pub mod query;
mod schema;

// Re-export error types for convenience
pub use error::{Error, Result};
