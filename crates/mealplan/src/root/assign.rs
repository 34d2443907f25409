use saborbr_shared::{MealPlan, MealPlanRepository, MealSlot};
use time::Date;

impl<S: MealPlanRepository> super::Command<S> {
    /// Put `recipe_id` in a slot of `day`, creating the week's plan if needed.
    ///
    /// Breakfast, lunch and dinner hold one recipe and are overwritten. Snacks
    /// accumulate, ignoring an id already present that day.
    #[tracing::instrument(skip(self))]
    pub async fn assign(
        &self,
        week: Date,
        day: Date,
        slot: MealSlot,
        recipe_id: &str,
    ) -> saborbr_shared::Result<MealPlan> {
        let recipe_id = recipe_id.trim();
        if recipe_id.is_empty() {
            saborbr_shared::user!("recipe id is required");
        }

        let mut plan = match self.for_week(week).await? {
            Some(plan) => plan,
            None => MealPlan::new(week),
        };

        if !plan.contains(day) {
            saborbr_shared::user!(
                "{} is outside the week of {}",
                saborbr_shared::day_key(day)?,
                saborbr_shared::day_key(plan.week_start)?
            );
        }

        let meals = plan
            .meals
            .entry(saborbr_shared::day_key(day)?)
            .or_default();

        match slot {
            MealSlot::Breakfast => meals.breakfast = Some(recipe_id.to_owned()),
            MealSlot::Lunch => meals.lunch = Some(recipe_id.to_owned()),
            MealSlot::Dinner => meals.dinner = Some(recipe_id.to_owned()),
            MealSlot::Snack => {
                if !meals.snacks.iter().any(|id| id == recipe_id) {
                    meals.snacks.push(recipe_id.to_owned());
                }
            }
        }

        MealPlanRepository::save(&self.0, &plan).await?;

        tracing::info!(plan_id = %plan.id, "recipe assigned");

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use saborbr_shared::{InMemoryStore, MealSlot};
    use time::macros::date;

    use crate::Command;

    #[tokio::test]
    async fn creates_plan_on_first_assignment() {
        let command = Command(InMemoryStore::new());

        let plan = command
            .assign(
                date!(2025 - 10 - 15),
                date!(2025 - 10 - 13),
                MealSlot::Lunch,
                "recipe-2",
            )
            .await
            .unwrap();

        assert_eq!(plan.week_start, date!(2025 - 10 - 12));
        let day = plan.day(date!(2025 - 10 - 13)).unwrap();
        assert_eq!(day.lunch.as_deref(), Some("recipe-2"));
    }

    #[tokio::test]
    async fn main_slots_overwrite_and_snacks_accumulate() {
        let command = Command(InMemoryStore::new());
        let week = date!(2025 - 10 - 12);
        let day = date!(2025 - 10 - 14);

        for (slot, id) in [
            (MealSlot::Dinner, "a"),
            (MealSlot::Dinner, "b"),
            (MealSlot::Snack, "c"),
            (MealSlot::Snack, "d"),
            (MealSlot::Snack, "c"),
        ] {
            command.assign(week, day, slot, id).await.unwrap();
        }

        let plan = command.current(day).await.unwrap().unwrap();
        let meals = plan.day(day).unwrap();
        assert_eq!(meals.dinner.as_deref(), Some("b"));
        assert_eq!(meals.snacks, vec!["c".to_owned(), "d".to_owned()]);
    }

    #[tokio::test]
    async fn rejects_day_outside_week() {
        let command = Command(InMemoryStore::new());

        let err = command
            .assign(
                date!(2025 - 10 - 12),
                date!(2025 - 10 - 19),
                MealSlot::Breakfast,
                "a",
            )
            .await
            .unwrap_err();

        assert!(matches!(err, saborbr_shared::Error::User(_)));
        assert!(command.for_week(date!(2025 - 10 - 12)).await.unwrap().is_none());
    }
}
