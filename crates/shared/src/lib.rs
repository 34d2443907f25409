mod command;
mod date;
pub mod memory;
pub mod mealplan;
pub mod recipe;
mod repository;
pub mod shopping;

pub use command::*;
pub use date::*;
pub use mealplan::{DayMeals, MealPlan, MealSlot};
pub use memory::InMemoryStore;
pub use recipe::{Ingredient, Recipe, import_recipes};
pub use repository::*;
pub use shopping::{DEFAULT_CATEGORY, DEFAULT_UNIT, GroceryItem, GroceryList};
