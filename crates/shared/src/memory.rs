use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;
use time::Date;

use crate::{
    GroceryList, GroceryListRepository, MealPlan, MealPlanRepository, Recipe, RecipeRepository,
};

#[derive(Default)]
struct Inner {
    recipes: HashMap<String, Recipe>,
    plans: HashMap<String, MealPlan>,
    lists: HashMap<String, GroceryList>,
}

/// In-process store implementing every repository. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> crate::Result<RwLockReadGuard<'_, Inner>> {
        match self.inner.read() {
            Ok(guard) => Ok(guard),
            Err(_) => crate::bail!("in-memory store lock poisoned"),
        }
    }

    fn write(&self) -> crate::Result<RwLockWriteGuard<'_, Inner>> {
        match self.inner.write() {
            Ok(guard) => Ok(guard),
            Err(_) => crate::bail!("in-memory store lock poisoned"),
        }
    }
}

#[async_trait]
impl RecipeRepository for InMemoryStore {
    async fn get(&self, id: &str) -> crate::Result<Option<Recipe>> {
        Ok(self.read()?.recipes.get(id).cloned())
    }

    async fn save(&self, recipe: &Recipe) -> crate::Result<()> {
        self.write()?
            .recipes
            .insert(recipe.id.to_owned(), recipe.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> crate::Result<()> {
        self.write()?.recipes.remove(id);
        Ok(())
    }

    async fn list(&self) -> crate::Result<Vec<Recipe>> {
        let mut recipes = self.read()?.recipes.values().cloned().collect::<Vec<_>>();
        recipes.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(recipes)
    }
}

#[async_trait]
impl MealPlanRepository for InMemoryStore {
    async fn get(&self, id: &str) -> crate::Result<Option<MealPlan>> {
        Ok(self.read()?.plans.get(id).cloned())
    }

    async fn find_by_week(&self, week_start: Date) -> crate::Result<Option<MealPlan>> {
        Ok(self
            .read()?
            .plans
            .values()
            .find(|p| p.week_start == week_start)
            .cloned())
    }

    async fn save(&self, plan: &MealPlan) -> crate::Result<()> {
        self.write()?.plans.insert(plan.id.to_owned(), plan.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> crate::Result<()> {
        self.write()?.plans.remove(id);
        Ok(())
    }

    async fn list(&self) -> crate::Result<Vec<MealPlan>> {
        let mut plans = self.read()?.plans.values().cloned().collect::<Vec<_>>();
        plans.sort_by(|a, b| a.week_start.cmp(&b.week_start));
        Ok(plans)
    }
}

#[async_trait]
impl GroceryListRepository for InMemoryStore {
    async fn get(&self, id: &str) -> crate::Result<Option<GroceryList>> {
        Ok(self.read()?.lists.get(id).cloned())
    }

    async fn save(&self, list: &GroceryList) -> crate::Result<()> {
        self.write()?.lists.insert(list.id.to_owned(), list.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> crate::Result<()> {
        self.write()?.lists.remove(id);
        Ok(())
    }

    async fn list(&self) -> crate::Result<Vec<GroceryList>> {
        let mut lists = self.read()?.lists.values().cloned().collect::<Vec<_>>();
        lists.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(lists)
    }
}
