use std::collections::HashMap;

use saborbr_shared::{GroceryItem, GroceryList, MealPlan, Recipe, week_list_name};

use crate::ShoppingError;

/// Resolves a recipe id to a loaded recipe. `None` means the recipe no
/// longer exists and is skipped.
pub trait RecipeResolver {
    fn resolve(&self, id: &str) -> Option<&Recipe>;
}

impl RecipeResolver for HashMap<String, Recipe> {
    fn resolve(&self, id: &str) -> Option<&Recipe> {
        self.get(id)
    }
}

impl RecipeResolver for [Recipe] {
    fn resolve(&self, id: &str) -> Option<&Recipe> {
        self.iter().find(|r| r.id == id)
    }
}

impl RecipeResolver for Vec<Recipe> {
    fn resolve(&self, id: &str) -> Option<&Recipe> {
        self.as_slice().resolve(id)
    }
}

/// Grocery Aggregator
///
/// Stateless domain service that folds a week of recipe assignments into one
/// shopping list:
/// - "Farinha 200 g" + "Farinha 300 g" = "Farinha 500 g"
/// - "Farinha 1 kg" + "Farinha 300 g" = 2 separate items (units never convert)
/// - "farinha" and "Farinha" are different items (names are not normalized)
pub struct GroceryAggregator;

impl GroceryAggregator {
    /// Build a fresh grocery list for `plan`.
    ///
    /// Fails with [`ShoppingError::MissingPlan`] when there is no plan. A plan
    /// that resolves to no ingredients yields an empty list, not an error.
    pub fn aggregate<R>(plan: Option<&MealPlan>, recipes: &R) -> Result<GroceryList, ShoppingError>
    where
        R: RecipeResolver + ?Sized,
    {
        let Some(plan) = plan else {
            return Err(ShoppingError::MissingPlan);
        };

        let resolved = plan.recipe_ids().into_iter().filter_map(|id| {
            let recipe = recipes.resolve(id);
            if recipe.is_none() {
                tracing::debug!(recipe_id = id, "skipping unresolved recipe");
            }
            recipe
        });

        let items = Self::merge(resolved)?;

        Ok(GroceryList::new(week_list_name(plan.week_start), items))
    }

    /// Merge ingredient lines by exact (name, unit), summing quantities.
    ///
    /// Items keep the order in which their key was first seen. A quantity
    /// that is not finite, or a sum that overflows, is a user error.
    pub fn merge<'a>(
        recipes: impl IntoIterator<Item = &'a Recipe>,
    ) -> Result<Vec<GroceryItem>, ShoppingError> {
        let mut items: Vec<GroceryItem> = Vec::new();
        let mut positions: HashMap<(&str, &str), usize> = HashMap::new();

        for recipe in recipes {
            for ingredient in &recipe.ingredients {
                if !ingredient.quantity.is_finite() {
                    return Err(invalid_quantity(&ingredient.name, &ingredient.unit));
                }

                match positions.get(&ingredient.key()) {
                    Some(&pos) => {
                        let quantity = items[pos].quantity + ingredient.quantity;
                        if !quantity.is_finite() {
                            return Err(invalid_quantity(&ingredient.name, &ingredient.unit));
                        }
                        items[pos].quantity = quantity;
                    }
                    None => {
                        positions.insert(ingredient.key(), items.len());
                        items.push(GroceryItem::new(
                            ingredient.name.to_owned(),
                            ingredient.quantity,
                            ingredient.unit.to_owned(),
                            ingredient.category.to_owned(),
                        ));
                    }
                }
            }
        }

        Ok(items)
    }
}

fn invalid_quantity(name: &str, unit: &str) -> ShoppingError {
    let message = format!("quantity of {name} ({unit}) is not a finite number");
    saborbr_shared::Error::User(message).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use saborbr_shared::{DEFAULT_CATEGORY, DayMeals, Ingredient};
    use std::collections::HashSet;
    use time::macros::date;

    fn plan(days: &[(&str, DayMeals)]) -> MealPlan {
        let mut plan = MealPlan::new(date!(2025 - 10 - 12));
        for (day, meals) in days {
            plan.meals.insert(day.to_string(), meals.clone());
        }
        plan
    }

    fn breakfast_lunch(breakfast: &str, lunch: &str) -> DayMeals {
        DayMeals {
            breakfast: Some(breakfast.to_owned()),
            lunch: Some(lunch.to_owned()),
            ..Default::default()
        }
    }

    fn recipes() -> Vec<Recipe> {
        vec![
            Recipe::new("a", "Bolo")
                .ingredient(Ingredient::new("flour", 200.0, "g"))
                .ingredient(Ingredient::new("egg", 1.0, "un")),
            Recipe::new("b", "Torta")
                .ingredient(Ingredient::new("flour", 300.0, "g"))
                .ingredient(Ingredient::new("onion", 1.0, "un").with_category("Hortifruti")),
        ]
    }

    #[test]
    fn test_merges_same_name_and_unit() {
        let plan = plan(&[("2025-10-13", breakfast_lunch("a", "b"))]);

        let list = GroceryAggregator::aggregate(Some(&plan), &recipes()).unwrap();

        assert_eq!(list.items.len(), 3);
        assert_eq!(list.items[0].name, "flour");
        assert_eq!(list.items[0].quantity, 500.0);
        assert_eq!(list.items[0].unit, "g");
        assert_eq!(list.items[1].name, "egg");
        assert_eq!(list.items[1].quantity, 1.0);
        assert_eq!(list.items[2].name, "onion");
        assert_eq!(list.items[2].category, "Hortifruti");
        assert_eq!(list.items[1].category, DEFAULT_CATEGORY);
        assert!(list.items.iter().all(|i| !i.checked));
        assert!(!list.completed);
        assert_eq!(list.name, "Lista da Semana - 12/10");
    }

    #[test]
    fn test_units_and_case_never_merge() {
        let recipes = vec![
            Recipe::new("a", "A")
                .ingredient(Ingredient::new("Farinha", 1.0, "kg"))
                .ingredient(Ingredient::new("Farinha", 300.0, "g"))
                .ingredient(Ingredient::new("farinha", 100.0, "g"))
                .ingredient(Ingredient::new("Farinha ", 50.0, "g")),
        ];
        let plan = plan(&[(
            "2025-10-13",
            DayMeals {
                dinner: Some("a".to_owned()),
                ..Default::default()
            },
        )]);

        let list = GroceryAggregator::aggregate(Some(&plan), &recipes).unwrap();

        assert_eq!(list.items.len(), 4);
    }

    #[test]
    fn test_overflowing_sum_is_rejected() {
        let recipes = vec![
            Recipe::new("a", "A").ingredient(Ingredient::new("sal", 1e308, "g")),
            Recipe::new("b", "B").ingredient(Ingredient::new("sal", 1e308, "g")),
        ];
        let plan = plan(&[("2025-10-13", breakfast_lunch("a", "b"))]);

        let result = GroceryAggregator::aggregate(Some(&plan), &recipes);

        assert!(matches!(
            result,
            Err(ShoppingError::Shared(saborbr_shared::Error::User(_)))
        ));
    }

    #[test]
    fn test_non_finite_line_is_rejected() {
        let recipes =
            vec![Recipe::new("a", "A").ingredient(Ingredient::new("sal", f64::NAN, "g"))];

        let result = GroceryAggregator::merge(&recipes);

        assert!(matches!(
            result,
            Err(ShoppingError::Shared(saborbr_shared::Error::User(_)))
        ));
    }

    #[test]
    fn test_missing_plan() {
        let result = GroceryAggregator::aggregate(None, &recipes());
        assert!(matches!(result, Err(ShoppingError::MissingPlan)));
    }

    #[test]
    fn test_unresolved_recipe_yields_empty_list() {
        let plan = plan(&[(
            "2025-10-13",
            DayMeals {
                lunch: Some("deleted".to_owned()),
                ..Default::default()
            },
        )]);

        let list = GroceryAggregator::aggregate(Some(&plan), &recipes()).unwrap();

        assert!(list.is_empty());
    }

    #[test]
    fn test_plan_without_meals_yields_empty_list() {
        let plan = plan(&[]);
        let list = GroceryAggregator::aggregate(Some(&plan), &recipes()).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_unresolved_recipe_does_not_drop_others() {
        let plan = plan(&[("2025-10-13", breakfast_lunch("deleted", "b"))]);

        let list = GroceryAggregator::aggregate(Some(&plan), &recipes()).unwrap();

        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].quantity, 300.0);
    }

    #[test]
    fn test_same_recipe_in_many_slots_counted_once() {
        let plan = plan(&[
            (
                "2025-10-13",
                DayMeals {
                    snacks: vec!["a".to_owned(), "a".to_owned()],
                    ..Default::default()
                },
            ),
            (
                "2025-10-14",
                DayMeals {
                    breakfast: Some("a".to_owned()),
                    ..Default::default()
                },
            ),
        ]);

        let list = GroceryAggregator::aggregate(Some(&plan), &recipes()).unwrap();

        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].quantity, 200.0);
        assert_eq!(list.items[1].quantity, 1.0);
    }

    #[test]
    fn test_item_ids_unique() {
        let plan = plan(&[("2025-10-13", breakfast_lunch("a", "b"))]);
        let list = GroceryAggregator::aggregate(Some(&plan), &recipes()).unwrap();

        let ids = list.items.iter().map(|i| i.id.as_str()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), list.items.len());
    }

    #[test]
    fn test_each_run_is_a_new_list() {
        let plan = plan(&[("2025-10-13", breakfast_lunch("a", "b"))]);
        let first = GroceryAggregator::aggregate(Some(&plan), &recipes()).unwrap();
        let second = GroceryAggregator::aggregate(Some(&plan), &recipes()).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(
            first.items.iter().map(|i| i.quantity).collect::<Vec<_>>(),
            second.items.iter().map(|i| i.quantity).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_resolves_from_map() {
        let map = recipes()
            .into_iter()
            .map(|r| (r.id.to_owned(), r))
            .collect::<HashMap<_, _>>();
        let plan = plan(&[("2025-10-13", breakfast_lunch("a", "b"))]);

        let list = GroceryAggregator::aggregate(Some(&plan), &map).unwrap();

        assert_eq!(list.items.len(), 3);
    }
}
