mod grocery_list;
mod nutrition_plan;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "fitcoach",
    "m0_1",
    vec_box![],
    vec_box![
        nutrition_plan::CreateTable,
        nutrition_plan::CreateIdx,
        grocery_list::CreateTable,
        grocery_list::CreateIdx,
    ]
);
