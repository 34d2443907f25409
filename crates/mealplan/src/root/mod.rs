mod assign;
mod clear;

use saborbr_shared::{MealPlan, MealPlanRepository};
use time::Date;

#[derive(Clone)]
pub struct Command<S>(pub S);

impl<S: MealPlanRepository> Command<S> {
    /// Plan for the week containing `date`.
    pub async fn for_week(&self, date: Date) -> saborbr_shared::Result<Option<MealPlan>> {
        self.0.find_by_week(saborbr_shared::week_start(date)).await
    }

    /// Plan whose week contains `today`.
    pub async fn current(&self, today: Date) -> saborbr_shared::Result<Option<MealPlan>> {
        self.for_week(today).await
    }
}
