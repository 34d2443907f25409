use saborbr_shared::{GroceryItem, GroceryListRepository};

impl<S: GroceryListRepository> super::Command<S> {
    /// Flip the checked flag of one item and return its new state.
    pub async fn toggle(
        &self,
        list_id: &str,
        item_id: &str,
    ) -> saborbr_shared::Result<GroceryItem> {
        let mut list = self.load_existing(list_id).await?;

        let Some(item) = list.item_mut(item_id) else {
            saborbr_shared::user!("item not found");
        };

        item.checked = !item.checked;
        let item = item.clone();

        GroceryListRepository::save(&self.0, &list).await?;

        Ok(item)
    }
}
