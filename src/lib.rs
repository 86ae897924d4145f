pub mod catalog;
pub mod cli;
pub mod config;
pub mod constructor;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod server;

pub use error::{DishError, Result};
pub use models::{Dish, Ingredient};
