use saborbr_shared::GroceryListRepository;

impl<S: GroceryListRepository> super::Command<S> {
    /// Uncheck every item, ready for the next shopping trip.
    pub async fn reset(&self, list_id: &str) -> saborbr_shared::Result<()> {
        let mut list = self.load_existing(list_id).await?;

        for item in list.items.iter_mut() {
            item.checked = false;
        }

        GroceryListRepository::save(&self.0, &list).await
    }
}
