mod dish;
mod ingredient;

pub use dish::Dish;
pub use ingredient::Ingredient;
