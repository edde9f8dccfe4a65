//! Category repository
//!
//! Categories carry no localized fields themselves; names live in
//! `category_translations`, one row per (category, language).

use sqlx::MySqlPool;
use tracing::debug;

use crate::error::Result;
use crate::models::CategorySummary;

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List categories with their name in the given language.
    ///
    /// A category with no translation for `language_code` is absent
    /// from the result. Order unspecified.
    pub async fn list_by_language(&self, language_code: &str) -> Result<Vec<CategorySummary>> {
        debug!(language = language_code, "listing categories");

        let rows = sqlx::query_as::<_, CategorySummary>(
            r#"
            SELECT c.slug, ct.name
            FROM categories c
            JOIN category_translations ct ON c.id = ct.category_id
            JOIN languages l ON l.id = ct.language_id
            WHERE l.code = ?
            "#,
        )
        .bind(language_code)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
