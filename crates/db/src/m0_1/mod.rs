mod grocery_list;
mod meal_plan;
mod recipe;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "saborbr",
    "m0_1",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        meal_plan::CreateTable,
        meal_plan::CreateWeekStartIdx,
        grocery_list::CreateTable
    ]
);
