use fitcoach_shared::grocery::GroceryList;
use fitcoach_shared::nutrition::NutritionPlanRecord;

/// Edit applied to a stored list. Returns whether the list changed and must be
/// written back; an error aborts the edit.
pub type ListChange = Box<dyn FnOnce(&mut GroceryList) -> fitcoach_shared::Result<bool> + Send>;

/// Where nutrition plans come from.
#[async_trait::async_trait]
pub trait PlanSource: Send + Sync {
    /// Plan `plan_id` of the user, or the user's latest plan when no id is given.
    async fn find_plan(
        &self,
        user_id: &str,
        plan_id: Option<&str>,
    ) -> fitcoach_shared::Result<Option<NutritionPlanRecord>>;
}

/// Where generated grocery lists are kept.
#[async_trait::async_trait]
pub trait GroceryListStore: Send + Sync {
    async fn create(&self, list: &GroceryList) -> fitcoach_shared::Result<()>;

    async fn find(&self, user_id: &str, id: &str) -> fitcoach_shared::Result<Option<GroceryList>>;

    /// Lists of the user, newest first.
    async fn list_by_user(&self, user_id: &str) -> fitcoach_shared::Result<Vec<GroceryList>>;

    /// Load a list, apply `change` and persist its `items` and `is_completed`
    /// as one atomic step. `None` when the list does not exist.
    async fn modify(
        &self,
        user_id: &str,
        id: &str,
        change: ListChange,
    ) -> fitcoach_shared::Result<Option<GroceryList>>;

    /// Returns `false` when nothing was deleted.
    async fn delete(&self, user_id: &str, id: &str) -> fitcoach_shared::Result<bool>;
}

#[async_trait::async_trait]
impl PlanSource for fitcoach_nutrition::Query {
    async fn find_plan(
        &self,
        user_id: &str,
        plan_id: Option<&str>,
    ) -> fitcoach_shared::Result<Option<NutritionPlanRecord>> {
        match plan_id {
            Some(id) => self.find(user_id, id).await,
            None => self.latest(user_id).await,
        }
    }
}
