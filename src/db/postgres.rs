//! PostgreSQL task repository

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::db::TaskRepository;
use crate::error::{StoreError, StoreResult};
use crate::models::{Task, TaskInput};

/// How long `connect` waits for the first connection before giving up.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    is_done BOOLEAN NOT NULL DEFAULT FALSE
)
"#;

// `id` is widened to INT8 on the way out so tables created as SERIAL
// and BIGSERIAL both decode into `i64`.
const LIST_SQL: &str = "SELECT id::BIGINT AS id, title, is_done FROM tasks";
const FIND_SQL: &str = "SELECT id::BIGINT AS id, title, is_done FROM tasks WHERE id = $1";
const INSERT_SQL: &str = "INSERT INTO tasks (title, is_done) VALUES ($1, $2) RETURNING id::BIGINT";
const UPDATE_SQL: &str = "UPDATE tasks SET title = $1, is_done = $2 WHERE id = $3";
const DELETE_SQL: &str = "DELETE FROM tasks WHERE id = $1";

/// `sqlx` pool over the `tasks` table.
#[derive(Debug, Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    /// Connects, pings and creates the schema if absent.
    ///
    /// Any failure here is [`StoreError::BackendUnavailable`].
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(CONNECT_TIMEOUT)
            .connect(database_url)
            .await
            .map_err(|e| {
                StoreError::BackendUnavailable(format!("Failed to connect to PostgreSQL: {}", e))
            })?;

        let repository = Self::from_pool(pool);
        repository
            .ping()
            .await
            .map_err(|e| StoreError::BackendUnavailable(e.to_string()))?;
        repository
            .ensure_schema()
            .await
            .map_err(|e| StoreError::BackendUnavailable(e.to_string()))?;

        info!("PostgreSQL task repository ready");
        Ok(repository)
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Idempotently creates the `tasks` table.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn list(&self) -> StoreResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(LIST_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(tasks)
    }

    async fn find(&self, id: i64) -> StoreResult<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(FIND_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(task)
    }

    async fn insert(&self, input: &TaskInput) -> StoreResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(INSERT_SQL)
            .bind(&input.title)
            .bind(input.is_done)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update(&self, id: i64, input: &TaskInput) -> StoreResult<bool> {
        let result = sqlx::query(UPDATE_SQL)
            .bind(&input.title)
            .bind(input.is_done)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query(DELETE_SQL)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
