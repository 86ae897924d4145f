use serde::{Deserialize, Serialize};

/// A priced ingredient that can fill one slot of a dish.
///
/// `value` is the ingredient's identity: it is unique across the whole
/// catalog and is what the combination engine deduplicates on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Title of the ingredient type this ingredient belongs to (e.g. "Bun").
    #[serde(rename = "type")]
    pub kind: String,

    /// Title of the ingredient (e.g. "Sesame bun").
    pub value: String,

    pub price: f64,
}

impl Ingredient {
    pub fn new(kind: impl Into<String>, value: impl Into<String>, price: f64) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            price,
        }
    }

    /// Identity used to detect the same ingredient across groups.
    #[inline]
    pub fn identity(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_kind_as_type() {
        let ing = Ingredient::new("Bun", "Bun1", 1.0);
        let json = serde_json::to_value(&ing).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "Bun", "value": "Bun1", "price": 1.0})
        );
    }

    #[test]
    fn test_identity_is_value() {
        let ing = Ingredient::new("Sauce", "Ketchup", 0.5);
        assert_eq!(ing.identity(), "Ketchup");
    }
}
