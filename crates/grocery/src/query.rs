use fitcoach_shared::grocery::GroceryList;

use crate::repository::Repository;
use crate::store::GroceryListStore;

#[derive(Clone)]
pub struct Query<S>(pub S);

impl Query<Repository> {
    pub fn sqlite(state: fitcoach_shared::State) -> Self {
        Self(Repository(state))
    }
}

impl<S: GroceryListStore> Query<S> {
    pub async fn find(
        &self,
        user_id: &str,
        id: &str,
    ) -> fitcoach_shared::Result<Option<GroceryList>> {
        self.0.find(user_id, id).await
    }

    pub async fn list(&self, user_id: &str) -> fitcoach_shared::Result<Vec<GroceryList>> {
        self.0.list_by_user(user_id).await
    }
}
