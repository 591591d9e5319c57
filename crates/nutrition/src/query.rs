use std::ops::Deref;

use fitcoach_shared::nutrition::NutritionPlanRecord;

use crate::repository::{self, FindType};

#[derive(Clone)]
pub struct Query(pub fitcoach_shared::State);

impl Deref for Query {
    type Target = fitcoach_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Query {
    pub async fn find(
        &self,
        user_id: impl Into<String>,
        id: impl Into<String>,
    ) -> fitcoach_shared::Result<Option<NutritionPlanRecord>> {
        repository::find(&self.read_db, user_id.into(), FindType::Id(id.into())).await
    }

    /// Most recently stored plan of the user.
    pub async fn latest(
        &self,
        user_id: impl Into<String>,
    ) -> fitcoach_shared::Result<Option<NutritionPlanRecord>> {
        repository::find(&self.read_db, user_id.into(), FindType::Latest).await
    }

    pub async fn list(
        &self,
        user_id: impl Into<String>,
    ) -> fitcoach_shared::Result<Vec<NutritionPlanRecord>> {
        repository::list(&self.read_db, user_id.into()).await
    }
}
