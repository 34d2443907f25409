use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub const DEFAULT_CATEGORY: &str = "Outros";
pub const DEFAULT_UNIT: &str = "un";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GroceryItem {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub checked: bool,
    pub category: String,
}

impl GroceryItem {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        category: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            quantity,
            unit: unit.into(),
            checked: false,
            category: category.unwrap_or_else(|| DEFAULT_CATEGORY.to_owned()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GroceryList {
    pub id: String,
    pub name: String,
    pub items: Vec<GroceryItem>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub completed: bool,
}

impl GroceryList {
    pub fn new(name: impl Into<String>, items: Vec<GroceryItem>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            items,
            created_at: OffsetDateTime::now_utc(),
            completed: false,
        }
    }

    /// Nothing to buy. A valid result, distinct from a missing plan.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: &str) -> Option<&GroceryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn item_mut(&mut self, id: &str) -> Option<&mut GroceryItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }
}
