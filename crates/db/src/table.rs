use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    Title,
    Servings,
    Ingredients,
}

#[derive(Iden, Clone)]
pub enum MealPlan {
    Table,
    Id,
    WeekStart,
    Meals,
}

#[derive(Iden, Clone)]
pub enum GroceryList {
    Table,
    Id,
    Name,
    Items,
    CreatedAt,
    Completed,
}
