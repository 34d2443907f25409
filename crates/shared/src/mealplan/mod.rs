use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::Date;

#[derive(Serialize, Deserialize, EnumString, Display, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DayMeals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snacks: Vec<String>,
}

impl DayMeals {
    pub fn is_empty(&self) -> bool {
        self.breakfast.is_none()
            && self.lunch.is_none()
            && self.dinner.is_none()
            && self.snacks.is_empty()
    }

    /// Recipe ids in slot order: breakfast, lunch, dinner, then snacks.
    pub fn recipe_ids(&self) -> impl Iterator<Item = &str> {
        self.breakfast
            .iter()
            .chain(self.lunch.iter())
            .chain(self.dinner.iter())
            .chain(self.snacks.iter())
            .map(String::as_str)
    }
}

/// Week-scoped assignment of recipes to meal slots.
///
/// `meals` is keyed by ISO day (`YYYY-MM-DD`); a missing day means nothing
/// planned that day.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MealPlan {
    pub id: String,
    pub week_start: Date,
    #[serde(default)]
    pub meals: BTreeMap<String, DayMeals>,
}

impl MealPlan {
    pub fn new(week_start: Date) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            week_start: crate::week_start(week_start),
            meals: BTreeMap::new(),
        }
    }

    pub fn contains(&self, date: Date) -> bool {
        self.week_start <= date && date < crate::week_end(self.week_start)
    }

    pub fn day(&self, date: Date) -> Option<&DayMeals> {
        self.meals.get(&crate::day_key(date).ok()?)
    }

    /// Distinct recipe ids referenced by the plan, in first-seen order
    /// (day ascending, then breakfast, lunch, dinner, snacks).
    pub fn recipe_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();

        self.meals
            .values()
            .flat_map(DayMeals::recipe_ids)
            .filter(|id| seen.insert(*id))
            .collect()
    }
}
