pub mod org;
pub mod pagination;
pub mod query;
