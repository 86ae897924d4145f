use std::collections::HashMap;

use async_trait::async_trait;

use crate::catalog::{CatalogRecord, IngredientSource};
use crate::error::Result;
use crate::models::Ingredient;

/// In-memory catalog keyed by type code; unknown codes have no ingredients.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    groups: HashMap<char, Vec<Ingredient>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an ingredient to the group for `code`.
    pub fn insert(&mut self, code: char, ingredient: Ingredient) {
        self.groups.entry(code).or_default().push(ingredient);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, code: char, ingredient: Ingredient) -> Self {
        self.insert(code, ingredient);
        self
    }

    /// Build a catalog from CSV rows, keeping row order within each code.
    pub fn from_records(records: &[CatalogRecord]) -> Result<Self> {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record.code_char()?, record.to_ingredient());
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl IngredientSource for MemoryCatalog {
    async fn fetch(&self, code: char) -> Result<Vec<Ingredient>> {
        Ok(self.groups.get(&code).cloned().unwrap_or_default())
    }
}
