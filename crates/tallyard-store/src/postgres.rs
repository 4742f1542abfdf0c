//! PostgreSQL backend.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use tallyard_core::Question;

use crate::traits::{LabelSum, QuestionStore};
use crate::Result;

/// Question store backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    /// Connects a new pool to the given database URL.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        tracing::debug!("connected to questions database");
        Ok(Self { pool })
    }

    /// Wraps an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    async fn list_questions(&self) -> Result<Vec<Question>> {
        let rows = sqlx::query("SELECT id, label, marks FROM questions ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| {
                Ok(Question {
                    id: row.try_get("id")?,
                    label: row.try_get("label")?,
                    marks: row.try_get("marks")?,
                })
            })
            .collect()
    }

    async fn update_mark(&self, id: i32, mark: i32) -> Result<()> {
        sqlx::query("UPDATE questions SET marks = $1 WHERE id = $2")
            .bind(mark)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn sum_marks_by_label(&self) -> Result<Vec<LabelSum>> {
        let rows =
            sqlx::query("SELECT label, SUM(marks) AS total_marks FROM questions GROUP BY label")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter()
            .map(|row| {
                Ok(LabelSum {
                    label: row.try_get("label")?,
                    total_marks: row.try_get("total_marks")?,
                })
            })
            .collect()
    }
}
