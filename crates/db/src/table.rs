use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum NutritionPlan {
    Table,
    Id,
    UserId,
    Name,
    Plan,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum GroceryList {
    Table,
    Id,
    UserId,
    NutritionPlanId,
    Name,
    Items,
    IsCompleted,
    CreatedAt,
}
