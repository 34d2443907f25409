mod generate;
mod item;
mod list;
mod reset;
mod toggle;

pub use item::*;

use saborbr_shared::{GroceryList, GroceryListRepository};

#[derive(Clone)]
pub struct Command<S>(pub S);

impl<S: GroceryListRepository> Command<S> {
    pub async fn load(&self, id: &str) -> saborbr_shared::Result<Option<GroceryList>> {
        GroceryListRepository::get(&self.0, id).await
    }

    pub async fn all(&self) -> saborbr_shared::Result<Vec<GroceryList>> {
        GroceryListRepository::list(&self.0).await
    }

    async fn load_existing(&self, id: &str) -> saborbr_shared::Result<GroceryList> {
        let Some(list) = self.load(id).await? else {
            saborbr_shared::not_found!("grocery list {}", id);
        };

        Ok(list)
    }
}
