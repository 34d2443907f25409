use saborbr_shared::{GroceryList, GroceryListRepository, blank_list_name};
use time::OffsetDateTime;

impl<S: GroceryListRepository> super::Command<S> {
    /// Create an empty list to fill by hand.
    pub async fn create_blank(&self, now: OffsetDateTime) -> saborbr_shared::Result<GroceryList> {
        let mut list = GroceryList::new(blank_list_name(now.date()), vec![]);
        list.created_at = now;

        GroceryListRepository::save(&self.0, &list).await?;

        Ok(list)
    }

    pub async fn set_completed(
        &self,
        list_id: &str,
        completed: bool,
    ) -> saborbr_shared::Result<()> {
        let mut list = self.load_existing(list_id).await?;
        list.completed = completed;

        GroceryListRepository::save(&self.0, &list).await
    }

    pub async fn delete(&self, list_id: &str) -> saborbr_shared::Result<()> {
        self.load_existing(list_id).await?;

        GroceryListRepository::delete(&self.0, list_id).await?;
        tracing::info!(list_id, "grocery list deleted");

        Ok(())
    }
}
