mod import;
mod memory;
mod sqlite;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Ingredient;

pub use import::{CatalogRecord, load_records, read_records};
pub use memory::MemoryCatalog;
pub use sqlite::SqliteCatalog;

/// Where ingredients for a type code come from.
///
/// Implementations return ingredients in a stable order and report every
/// failure as [`DishError::Lookup`](crate::error::DishError::Lookup).
#[async_trait]
pub trait IngredientSource: Send + Sync {
    async fn fetch(&self, code: char) -> Result<Vec<Ingredient>>;
}
