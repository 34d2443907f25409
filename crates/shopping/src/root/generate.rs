use std::collections::HashMap;

use saborbr_shared::{GroceryList, GroceryListRepository, MealPlanRepository, RecipeRepository};
use time::Date;

use crate::{GroceryAggregator, ShoppingError};

impl<S> super::Command<S>
where
    S: MealPlanRepository + RecipeRepository + GroceryListRepository,
{
    /// Generate and persist the grocery list for the week containing `week`.
    #[tracing::instrument(skip(self))]
    pub async fn generate(&self, week: Date) -> crate::Result<GroceryList> {
        let week_start = saborbr_shared::week_start(week);
        let Some(plan) = MealPlanRepository::find_by_week(&self.0, week_start).await? else {
            tracing::info!(%week_start, "no meal plan for week");
            return Err(ShoppingError::MissingPlan);
        };

        let mut recipes = HashMap::new();
        for id in plan.recipe_ids() {
            if let Some(recipe) = RecipeRepository::get(&self.0, id).await? {
                recipes.insert(id.to_owned(), recipe);
            }
        }

        let list = GroceryAggregator::aggregate(Some(&plan), &recipes)?;
        GroceryListRepository::save(&self.0, &list).await?;

        tracing::info!(
            list_id = %list.id,
            plan_id = %plan.id,
            items = list.items.len(),
            "grocery list generated"
        );

        Ok(list)
    }
}
