pub mod aggregate;
pub mod schema;
pub mod submission;
