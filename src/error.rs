use thiserror::Error;

/// Boxed cause of a failed ingredient lookup.
pub type LookupSource = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum DishError {
    #[error("Ingredient codes are required")]
    EmptyCodes,

    #[error("Too many ingredient codes: {count} (limit {limit})")]
    TooManyGroups { count: usize, limit: usize },

    #[error("Ingredient code '{0}' produced no candidates")]
    EmptyGroup(char),

    #[error("Too many dish combinations (limit {limit})")]
    TooManyDishes { limit: usize },

    #[error("Dish search too large (limit {limit} steps)")]
    SearchTooLarge { limit: usize },

    #[error("Ingredient lookup failed for code '{code}': {source}")]
    Lookup {
        code: char,
        #[source]
        source: LookupSource,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dish generation task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl DishError {
    /// Wrap any source failure as a lookup error for `code`.
    pub fn lookup<E>(code: char, source: E) -> Self
    where
        E: Into<LookupSource>,
    {
        DishError::Lookup {
            code,
            source: source.into(),
        }
    }

    /// Whether the error was caused by the request rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DishError::EmptyCodes
                | DishError::TooManyGroups { .. }
                | DishError::EmptyGroup(_)
                | DishError::TooManyDishes { .. }
                | DishError::SearchTooLarge { .. }
                | DishError::InvalidInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DishError>;
