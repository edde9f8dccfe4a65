//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One parameterized query per operation, inputs always bound
//! - Translation tables joined through `languages.code`
//! - Zero matches means an empty Vec (or None), never an error

pub mod categories;
pub mod languages;
pub mod posts;

pub use categories::CategoryRepo;
pub use languages::LanguageRepo;
pub use posts::PostRepo;
