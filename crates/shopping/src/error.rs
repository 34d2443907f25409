#[derive(Debug, thiserror::Error)]
pub enum ShoppingError {
    #[error("no meal plan for this week, add recipes to the plan first")]
    MissingPlan,

    #[error(transparent)]
    Shared(#[from] saborbr_shared::Error),
}

pub type Result<T> = std::result::Result<T, ShoppingError>;
