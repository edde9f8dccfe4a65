//! linguablog-db: read-only query layer for a multilingual blog
//!
//! The schema follows the translation-table pattern: language-independent
//! base tables (`categories`, `posts`) joined at query time with
//! per-language translation tables (`category_translations`,
//! `post_translations`) through `languages.code`. This crate only reads;
//! writes happen outside this layer.

pub mod config;
pub mod error;
pub mod models;
pub mod pool;
pub mod repos;

pub use config::DbConfig;
pub use error::{DbError, Result};
pub use models::{CategorySummary, Language, PostDetail, PostSummary};
pub use pool::create_pool;
pub use repos::{CategoryRepo, LanguageRepo, PostRepo};
