use saborbr_shared::{DEFAULT_UNIT, GroceryItem, GroceryListRepository};
use validator::Validate;

#[derive(Validate, Default)]
pub struct AddItemInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub quantity: Option<f64>,
    #[validate(length(min = 1, max = 30))]
    pub unit: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub category: Option<String>,
}

impl<S: GroceryListRepository> super::Command<S> {
    /// Append a hand-written item. Never merges with existing entries.
    pub async fn add_item(
        &self,
        list_id: &str,
        input: AddItemInput,
    ) -> saborbr_shared::Result<GroceryItem> {
        input.validate()?;

        let name = input.name.trim();
        if name.is_empty() {
            saborbr_shared::user!("item name is required");
        }

        let quantity = input.quantity.unwrap_or(1.0);
        if !quantity.is_finite() {
            saborbr_shared::user!("invalid quantity");
        }

        let mut list = self.load_existing(list_id).await?;
        let item = GroceryItem::new(
            name,
            quantity,
            input.unit.unwrap_or_else(|| DEFAULT_UNIT.to_owned()),
            input.category,
        );

        list.items.push(item.clone());
        GroceryListRepository::save(&self.0, &list).await?;

        Ok(item)
    }

    pub async fn remove_item(&self, list_id: &str, item_id: &str) -> saborbr_shared::Result<()> {
        let mut list = self.load_existing(list_id).await?;

        let len = list.items.len();
        list.items.retain(|i| i.id != item_id);
        if list.items.len() == len {
            saborbr_shared::user!("item not found");
        }

        GroceryListRepository::save(&self.0, &list).await
    }
}
