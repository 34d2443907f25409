use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Serialize, Deserialize, Validate, Clone, Debug, PartialEq)]
pub struct Ingredient {
    pub name: String,
    #[validate(range(min = 0.0), custom(function = "finite_quantity"))]
    pub quantity: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

fn finite_quantity(quantity: f64) -> Result<(), ValidationError> {
    if !quantity.is_finite() {
        return Err(ValidationError::new("finite"));
    }

    Ok(())
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Merge key: exact, case-sensitive (name, unit) pair.
    pub fn key(&self) -> (&str, &str) {
        (&self.name, &self.unit)
    }
}

/// Recipe as seen by meal planning and grocery aggregation.
///
/// Unknown fields (description, image, nutrition...) are ignored when
/// importing recipe JSON.
#[derive(Serialize, Deserialize, Validate, Clone, Debug, PartialEq)]
pub struct Recipe {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_servings")]
    pub servings: u16,
    #[serde(default)]
    #[validate(nested)]
    pub ingredients: Vec<Ingredient>,
}

fn default_servings() -> u16 {
    1
}

impl Recipe {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            servings: default_servings(),
            ingredients: vec![],
        }
    }

    pub fn ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }
}

/// Parse a JSON array of recipes and validate every ingredient line.
pub fn import_recipes(json: &str) -> crate::Result<Vec<Recipe>> {
    let recipes: Vec<Recipe> = serde_json::from_str(json)?;
    for recipe in &recipes {
        recipe.validate()?;
    }

    Ok(recipes)
}
