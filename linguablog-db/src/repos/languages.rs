//! Language repository

use sqlx::MySqlPool;
use tracing::debug;

use crate::error::Result;
use crate::models::Language;

/// Language repository
pub struct LanguageRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> LanguageRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List every supported language. Order unspecified.
    pub async fn list(&self) -> Result<Vec<Language>> {
        debug!("listing languages");

        let rows = sqlx::query_as::<_, Language>("SELECT id, code FROM languages")
            .fetch_all(self.pool)
            .await?;

        Ok(rows)
    }
}
