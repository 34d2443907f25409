use saborbr_shared::{MealPlan, MealPlanRepository, MealSlot};
use time::Date;

impl<S: MealPlanRepository> super::Command<S> {
    /// Unassign a slot. For snacks, `recipe_id` removes a single snack and
    /// `None` removes them all. Days left without meals are dropped.
    #[tracing::instrument(skip(self))]
    pub async fn clear(
        &self,
        week: Date,
        day: Date,
        slot: MealSlot,
        recipe_id: Option<&str>,
    ) -> saborbr_shared::Result<MealPlan> {
        let Some(mut plan) = self.for_week(week).await? else {
            saborbr_shared::not_found!(
                "meal plan for week {}",
                saborbr_shared::day_key(saborbr_shared::week_start(week))?
            );
        };

        let key = saborbr_shared::day_key(day)?;
        let Some(meals) = plan.meals.get_mut(&key) else {
            return Ok(plan);
        };

        match slot {
            MealSlot::Breakfast => meals.breakfast = None,
            MealSlot::Lunch => meals.lunch = None,
            MealSlot::Dinner => meals.dinner = None,
            MealSlot::Snack => match recipe_id {
                Some(id) => meals.snacks.retain(|s| s != id),
                None => meals.snacks.clear(),
            },
        }

        if meals.is_empty() {
            plan.meals.remove(&key);
        }

        MealPlanRepository::save(&self.0, &plan).await?;

        tracing::info!(plan_id = %plan.id, "slot cleared");

        Ok(plan)
    }
}
