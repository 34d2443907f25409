pub mod aggregation;
mod error;
pub mod query;
mod root;

pub use aggregation::{GroceryAggregator, RecipeResolver};
pub use error::{Result, ShoppingError};
pub use query::{Period, Progress, filter_by_period, progress};
pub use root::*;
