pub mod codes;
pub mod combine;
pub mod constants;
pub mod service;

pub use codes::parse_codes;
pub use combine::{generate, generate_bounded, upper_bound};
pub use constants::*;
pub use service::{ConstructorLimits, DishService, EmptyGroupPolicy};
