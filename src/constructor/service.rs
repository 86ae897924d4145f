use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, info};

use crate::catalog::IngredientSource;
use crate::constructor::codes::parse_codes;
use crate::constructor::combine::{generate_bounded, upper_bound};
use crate::constructor::constants::{DEFAULT_MAX_DISHES, DEFAULT_MAX_GROUPS, DEFAULT_MAX_STEPS};
use crate::error::{DishError, Result};
use crate::models::{Dish, Ingredient};

/// What to do when a requested code has no ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyGroupPolicy {
    /// Keep the empty group; the request then yields no dishes.
    #[default]
    Allow,
    /// Fail the request with [`DishError::EmptyGroup`].
    Reject,
}

impl FromStr for EmptyGroupPolicy {
    type Err = DishError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "allow" => Ok(EmptyGroupPolicy::Allow),
            "reject" => Ok(EmptyGroupPolicy::Reject),
            other => Err(DishError::Config(format!(
                "unknown empty group policy '{other}' (expected allow or reject)"
            ))),
        }
    }
}

impl fmt::Display for EmptyGroupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyGroupPolicy::Allow => write!(f, "allow"),
            EmptyGroupPolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Per-request bounds on the combination search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstructorLimits {
    pub max_groups: usize,
    pub max_dishes: usize,
    /// Partial selections the search may visit before giving up.
    pub max_steps: usize,
    pub empty_group: EmptyGroupPolicy,
}

impl Default for ConstructorLimits {
    fn default() -> Self {
        Self {
            max_groups: DEFAULT_MAX_GROUPS,
            max_dishes: DEFAULT_MAX_DISHES,
            max_steps: DEFAULT_MAX_STEPS,
            empty_group: EmptyGroupPolicy::default(),
        }
    }
}

/// Turns a code string into dishes using an ingredient source.
#[derive(Clone)]
pub struct DishService {
    source: Arc<dyn IngredientSource>,
    limits: ConstructorLimits,
}

impl fmt::Debug for DishService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DishService")
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

impl DishService {
    pub fn new(source: Arc<dyn IngredientSource>, limits: ConstructorLimits) -> Self {
        Self { source, limits }
    }

    pub fn limits(&self) -> &ConstructorLimits {
        &self.limits
    }

    /// Fetch the group for every code, in order, one lookup per code.
    ///
    /// Repeated codes are fetched again. The first failure aborts.
    pub async fn fetch_groups(&self, codes: &[char]) -> Result<Vec<Vec<Ingredient>>> {
        let mut groups = Vec::with_capacity(codes.len());

        for &code in codes {
            let group = self.source.fetch(code).await?;
            if group.is_empty() && self.limits.empty_group == EmptyGroupPolicy::Reject {
                return Err(DishError::EmptyGroup(code));
            }
            debug!(%code, size = group.len(), "Loaded ingredient group");
            groups.push(group);
        }

        Ok(groups)
    }

    /// Build every dish for `input`, a string of ingredient type codes.
    ///
    /// The search runs on the blocking pool so a large request does not
    /// stall the async workers.
    pub async fn build(&self, input: &str) -> Result<Vec<Dish>> {
        let codes = parse_codes(input, self.limits.max_groups)?;
        let groups = self.fetch_groups(&codes).await?;
        let bound = upper_bound(&groups);

        let limits = self.limits;
        let dishes = tokio::task::spawn_blocking(move || {
            generate_bounded(&groups, limits.max_dishes, limits.max_steps)
        })
        .await??;

        info!(
            codes = %codes.iter().collect::<String>(),
            upper_bound = bound,
            dishes = dishes.len(),
            "Built dish combinations"
        );
        Ok(dishes)
    }
}
