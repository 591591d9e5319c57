use std::ops::Deref;

use fitcoach_shared::nutrition::{NutritionPlan, NutritionPlanRecord};
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

use crate::repository;

#[derive(Validate)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    pub plan: serde_json::Value,
}

#[derive(Clone)]
pub struct Command(pub fitcoach_shared::State);

impl Deref for Command {
    type Target = fitcoach_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    /// Stores a plan document handed over by the plan generator.
    ///
    /// The document is kept as-is; it only has to be a JSON object whose
    /// schedule and shopping list have the expected shape.
    #[tracing::instrument(skip(self, input), fields(user_id = %input.user_id))]
    pub async fn create(&self, input: CreateInput) -> fitcoach_shared::Result<NutritionPlanRecord> {
        input.validate()?;

        if !input.plan.is_object() {
            return Err(fitcoach_shared::Error::BadRequest(
                "Nutrition plan must be a JSON object".to_owned(),
            ));
        }

        if let Err(e) = serde_json::from_value::<NutritionPlan>(input.plan.clone()) {
            return Err(fitcoach_shared::Error::BadRequest(format!(
                "Invalid nutrition plan: {e}"
            )));
        }

        let record = NutritionPlanRecord {
            id: Ulid::new().to_string(),
            user_id: input.user_id,
            name: input.name,
            plan: input.plan,
            created_at: OffsetDateTime::now_utc().unix_timestamp(),
        };

        repository::create(&self.write_db, &record).await?;

        tracing::info!(plan_id = %record.id, "Nutrition plan stored");

        Ok(record)
    }
}
