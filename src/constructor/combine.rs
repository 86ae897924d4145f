use std::collections::HashSet;

use crate::error::{DishError, Result};
use crate::models::{Dish, Ingredient};

/// Why a bounded walk stopped early.
enum Stop {
    Dishes,
    Steps,
}

/// Depth-first walk over the groups.
///
/// `used` and `current` are mutated in place and restored on the way back
/// up, so siblings can reuse an ingredient that a previous branch picked.
struct Combinator<'a> {
    groups: &'a [Vec<Ingredient>],
    /// `remaining[i]`: every identity offered by groups `i..`.
    remaining: Vec<HashSet<&'a str>>,
    used: HashSet<&'a str>,
    current: Vec<&'a Ingredient>,
    dishes: Vec<Dish>,
    max_dishes: usize,
    max_steps: usize,
    steps: usize,
}

impl<'a> Combinator<'a> {
    fn new(groups: &'a [Vec<Ingredient>], max_dishes: usize, max_steps: usize) -> Self {
        let mut remaining = vec![HashSet::new(); groups.len() + 1];
        for (i, group) in groups.iter().enumerate().rev() {
            let mut ids = remaining[i + 1].clone();
            ids.extend(group.iter().map(Ingredient::identity));
            remaining[i] = ids;
        }

        Self {
            groups,
            remaining,
            used: HashSet::new(),
            current: Vec::with_capacity(groups.len()),
            dishes: Vec::new(),
            max_dishes,
            max_steps,
            steps: 0,
        }
    }

    /// Whether groups `index..` still have enough unused identities to fill
    /// one slot each. Necessary, not sufficient.
    fn can_complete(&self, index: usize) -> bool {
        let offered = &self.remaining[index];
        let taken = self.used.iter().filter(|id| offered.contains(*id)).count();
        offered.len() - taken >= self.groups.len() - index
    }

    fn walk(&mut self, index: usize, price: f64) -> std::result::Result<(), Stop> {
        self.steps = self.steps.saturating_add(1);
        if self.steps > self.max_steps {
            return Err(Stop::Steps);
        }

        let groups = self.groups;
        let Some(group) = groups.get(index) else {
            if self.dishes.len() >= self.max_dishes {
                return Err(Stop::Dishes);
            }
            self.dishes.push(Dish::from_selection(&self.current, price));
            return Ok(());
        };

        if !self.can_complete(index) {
            return Ok(());
        }

        for ingredient in group {
            if !self.used.insert(ingredient.identity()) {
                continue;
            }
            self.current.push(ingredient);

            let outcome = self.walk(index + 1, price + ingredient.price);

            self.current.pop();
            self.used.remove(ingredient.identity());
            outcome?;
        }

        Ok(())
    }

    fn run(mut self) -> std::result::Result<Vec<Dish>, Stop> {
        // No dish can pass through an empty group.
        if self.groups.iter().any(Vec::is_empty) {
            return Ok(Vec::new());
        }
        self.walk(0, 0.0)?;
        Ok(self.dishes)
    }
}

/// Generate every dish that takes exactly one ingredient from each group.
///
/// No ingredient identity appears twice in a dish, even across groups.
/// Dishes come out in depth-first order, first group most significant.
/// An empty group yields no dishes; zero groups yield one empty dish.
pub fn generate(groups: &[Vec<Ingredient>]) -> Vec<Dish> {
    Combinator::new(groups, usize::MAX, usize::MAX)
        .run()
        .unwrap_or_default()
}

/// Like [`generate`], with two bounds on the work done.
///
/// Fails with [`DishError::TooManyDishes`] once more than `max_dishes`
/// dishes exist, and with [`DishError::SearchTooLarge`] once the walk has
/// visited more than `max_steps` partial selections, whether or not any of
/// them completes.
pub fn generate_bounded(
    groups: &[Vec<Ingredient>],
    max_dishes: usize,
    max_steps: usize,
) -> Result<Vec<Dish>> {
    Combinator::new(groups, max_dishes, max_steps)
        .run()
        .map_err(|stop| match stop {
            Stop::Dishes => DishError::TooManyDishes { limit: max_dishes },
            Stop::Steps => DishError::SearchTooLarge { limit: max_steps },
        })
}

/// Product of the group sizes, ignoring identity collisions.
pub fn upper_bound(groups: &[Vec<Ingredient>]) -> usize {
    groups
        .iter()
        .fold(1usize, |acc, group| acc.saturating_mul(group.len()))
}
