//! Post repository
//!
//! Listing queries return `PostSummary` (no body) ordered newest
//! first; the single-post lookup resolves the post's category name in
//! the same language, so a post whose category lacks a translation
//! for that language is treated as not found.

use sqlx::MySqlPool;
use tracing::debug;

use crate::error::Result;
use crate::models::{PostDetail, PostSummary};

/// Post repository
pub struct PostRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List posts translated into the given language, newest first.
    pub async fn list_by_language(&self, language_code: &str) -> Result<Vec<PostSummary>> {
        debug!(language = language_code, "listing posts");

        let rows = sqlx::query_as::<_, PostSummary>(
            r#"
            SELECT p.slug, pt.title, p.publish_date
            FROM posts p
            JOIN post_translations pt ON p.id = pt.post_id
            JOIN languages l ON l.id = pt.language_id
            WHERE l.code = ?
            ORDER BY p.publish_date DESC
            "#,
        )
        .bind(language_code)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get one post by slug in the given language, or `None` if the
    /// post has no translation (or its category has none) in that
    /// language.
    pub async fn get_by_slug(
        &self,
        slug: &str,
        language_code: &str,
    ) -> Result<Option<PostDetail>> {
        debug!(slug, language = language_code, "fetching post");

        let row = sqlx::query_as::<_, PostDetail>(
            r#"
            SELECT p.slug, pt.title, pt.content, p.publish_date,
                   c.slug AS category_slug, ct.name AS category_name
            FROM posts p
            JOIN post_translations pt ON p.id = pt.post_id
            JOIN languages l ON l.id = pt.language_id
            JOIN categories c ON p.category_id = c.id
            JOIN category_translations ct
                ON c.id = ct.category_id AND ct.language_id = pt.language_id
            WHERE p.slug = ? AND l.code = ?
            "#,
        )
        .bind(slug)
        .bind(language_code)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// List posts in a category translated into the given language,
    /// newest first.
    pub async fn list_by_category(
        &self,
        category_slug: &str,
        language_code: &str,
    ) -> Result<Vec<PostSummary>> {
        debug!(
            category = category_slug,
            language = language_code,
            "listing posts by category"
        );

        let rows = sqlx::query_as::<_, PostSummary>(
            r#"
            SELECT p.slug, pt.title, p.publish_date
            FROM posts p
            JOIN post_translations pt ON p.id = pt.post_id
            JOIN languages l ON l.id = pt.language_id
            JOIN categories c ON p.category_id = c.id
            WHERE c.slug = ? AND l.code = ?
            ORDER BY p.publish_date DESC
            "#,
        )
        .bind(category_slug)
        .bind(language_code)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
