use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

use crate::catalog::{CatalogRecord, IngredientSource};
use crate::error::{DishError, Result};
use crate::models::Ingredient;

/// Connections kept for a file-backed database.
const POOL_SIZE: u32 = 5;

const LOOKUP_QUERY: &str = r#"
    SELECT it.title AS kind, i.title AS value, i.price AS price
    FROM ingredient i
    INNER JOIN ingredient_type it ON i.type_id = it.id
    WHERE it.code = ?
    ORDER BY i.id
"#;

/// Ingredient catalog stored in SQLite.
#[derive(Debug, Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    /// Open the database at `database_url` and ensure the schema.
    ///
    /// The database file and its parent directory are created if missing.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // Every connection to an in-memory database sees its own empty database.
        let in_memory = database_url.contains(":memory:");
        if !in_memory {
            if let Some(dir) = options.get_filename().parent() {
                if !dir.as_os_str().is_empty() {
                    std::fs::create_dir_all(dir)?;
                }
            }
        }

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(POOL_SIZE)
        };

        let pool = pool_options.connect_with(options).await?;
        info!(database_url, "Connected to ingredient catalog");

        let catalog = Self::from_pool(pool);
        catalog.migrate().await?;
        Ok(catalog)
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the catalog tables if they do not exist.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS ingredient_type (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                code TEXT NOT NULL UNIQUE,
                title TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS ingredient (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type_id INTEGER NOT NULL REFERENCES ingredient_type(id),
                title TEXT NOT NULL UNIQUE,
                price REAL NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_ingredient_type_id ON ingredient(type_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Upsert catalog rows in one transaction. Returns the number of rows written.
    ///
    /// Types are matched by code and ingredients by title, so re-importing a
    /// file updates prices without creating duplicates.
    pub async fn import(&self, records: &[CatalogRecord]) -> Result<usize> {
        let mut tx = self.pool.begin().await?;

        for record in records {
            let code = record.code_char()?.to_string();
            let ingredient = record.to_ingredient();

            sqlx::query(
                r#"
                INSERT INTO ingredient_type (code, title) VALUES (?, ?)
                ON CONFLICT(code) DO UPDATE SET title = excluded.title
                "#,
            )
            .bind(&code)
            .bind(&ingredient.kind)
            .execute(&mut *tx)
            .await?;

            let type_id: i64 = sqlx::query("SELECT id FROM ingredient_type WHERE code = ?")
                .bind(&code)
                .fetch_one(&mut *tx)
                .await?
                .try_get("id")?;

            sqlx::query(
                r#"
                INSERT INTO ingredient (type_id, title, price) VALUES (?, ?, ?)
                ON CONFLICT(title) DO UPDATE SET type_id = excluded.type_id, price = excluded.price
                "#,
            )
            .bind(type_id)
            .bind(&ingredient.value)
            .bind(ingredient.price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        info!(rows = records.len(), "Imported catalog rows");
        Ok(records.len())
    }
}

fn row_to_ingredient(row: &SqliteRow) -> std::result::Result<Ingredient, sqlx::Error> {
    Ok(Ingredient {
        kind: row.try_get("kind")?,
        value: row.try_get("value")?,
        price: row.try_get("price")?,
    })
}

#[async_trait]
impl IngredientSource for SqliteCatalog {
    async fn fetch(&self, code: char) -> Result<Vec<Ingredient>> {
        let rows = sqlx::query(LOOKUP_QUERY)
            .bind(code.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DishError::lookup(code, e))?;

        let ingredients = rows
            .iter()
            .map(row_to_ingredient)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| DishError::lookup(code, e))?;

        debug!(%code, count = ingredients.len(), "Fetched ingredients");
        Ok(ingredients)
    }
}
