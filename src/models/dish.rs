use serde::{Deserialize, Serialize};

use crate::models::Ingredient;

/// One complete dish: an ingredient per requested code, in request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub ingredients: Vec<Ingredient>,

    /// Sum of the ingredient prices, accumulated in ingredient order.
    pub price: f64,
}

impl Dish {
    /// Build a dish that owns copies of `ingredients`.
    pub fn from_selection(ingredients: &[&Ingredient], price: f64) -> Self {
        let mut owned = Vec::with_capacity(ingredients.len());
        owned.extend(ingredients.iter().map(|&ing| ing.clone()));
        Self {
            ingredients: owned,
            price,
        }
    }

    /// Titles of the ingredients, joined for display.
    pub fn describe(&self) -> String {
        self.ingredients
            .iter()
            .map(|i| i.value.as_str())
            .collect::<Vec<_>>()
            .join(" + ")
    }
}
