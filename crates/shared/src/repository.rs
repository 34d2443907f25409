use async_trait::async_trait;
use time::Date;

use crate::{GroceryList, MealPlan, Recipe};

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn get(&self, id: &str) -> crate::Result<Option<Recipe>>;
    async fn save(&self, recipe: &Recipe) -> crate::Result<()>;
    async fn delete(&self, id: &str) -> crate::Result<()>;
    async fn list(&self) -> crate::Result<Vec<Recipe>>;
}

#[async_trait]
pub trait MealPlanRepository: Send + Sync {
    async fn get(&self, id: &str) -> crate::Result<Option<MealPlan>>;
    /// Plan whose week starts on `week_start` (already normalized).
    async fn find_by_week(&self, week_start: Date) -> crate::Result<Option<MealPlan>>;
    async fn save(&self, plan: &MealPlan) -> crate::Result<()>;
    async fn delete(&self, id: &str) -> crate::Result<()>;
    async fn list(&self) -> crate::Result<Vec<MealPlan>>;
}

#[async_trait]
pub trait GroceryListRepository: Send + Sync {
    async fn get(&self, id: &str) -> crate::Result<Option<GroceryList>>;
    /// Store or overwrite, keyed by the list id.
    async fn save(&self, list: &GroceryList) -> crate::Result<()>;
    async fn delete(&self, id: &str) -> crate::Result<()>;
    /// Newest first.
    async fn list(&self) -> crate::Result<Vec<GroceryList>>;
}
