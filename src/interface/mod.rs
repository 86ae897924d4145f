pub mod render;

pub use render::{display_dishes, dishes_table};
