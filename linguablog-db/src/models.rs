//! Typed row records, one per query result shape.
//!
//! Explicit structs instead of dynamic rows: a column rename in the
//! schema breaks the build here rather than a template downstream.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A supported locale, e.g. "en" or "fr"
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Language {
    pub id: i32,
    pub code: String,
}

/// Category as rendered in a given language
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategorySummary {
    pub slug: String,
    pub name: String,
}

/// Post listing entry (no body) for a given language
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub publish_date: NaiveDate,
}

/// Full post for a single-post page, category resolved in the same language
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostDetail {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub publish_date: NaiveDate,
    pub category_slug: String,
    pub category_name: String,
}
