use fitcoach_shared::grocery::GroceryList;
use fitcoach_shared::nutrition::NutritionPlan;
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

use crate::aggregation::extract_items;
use crate::repository::Repository;
use crate::store::{GroceryListStore, ListChange, PlanSource};

#[derive(Validate)]
pub struct GenerateInput {
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,
    #[validate(length(min = 1, max = 26))]
    pub plan_id: Option<String>,
}

#[derive(Clone)]
pub struct Command<P, S> {
    pub plans: P,
    pub lists: S,
}

impl Command<fitcoach_nutrition::Query, Repository> {
    pub fn sqlite(state: fitcoach_shared::State) -> Self {
        Self {
            plans: fitcoach_nutrition::Query(state.clone()),
            lists: Repository(state),
        }
    }
}

impl<P: PlanSource, S: GroceryListStore> Command<P, S> {
    pub fn new(plans: P, lists: S) -> Self {
        Self { plans, lists }
    }

    /// Derive a grocery list from a stored plan and persist it.
    ///
    /// Uses `plan_id` when given, the user's latest plan otherwise.
    #[tracing::instrument(skip(self, input), fields(user_id = %input.user_id))]
    pub async fn generate(&self, input: GenerateInput) -> fitcoach_shared::Result<GroceryList> {
        input.validate()?;

        let Some(record) = self
            .plans
            .find_plan(&input.user_id, input.plan_id.as_deref())
            .await?
        else {
            fitcoach_shared::not_found!("Nutrition plan");
        };

        let plan: NutritionPlan = serde_json::from_value(record.plan).map_err(|e| {
            fitcoach_shared::Error::BadRequest(format!("Invalid nutrition plan: {e}"))
        })?;

        let items = extract_items(&plan);
        if items.is_empty() {
            return Err(fitcoach_shared::Error::BadRequest(
                "No ingredients found in nutrition plan".to_owned(),
            ));
        }

        let now = OffsetDateTime::now_utc();
        let list = GroceryList {
            id: Ulid::new().to_string(),
            user_id: input.user_id,
            nutrition_plan_id: record.id,
            name: display_name(record.name.as_deref(), now),
            items,
            is_completed: false,
            created_at: now.unix_timestamp(),
        };

        self.lists.create(&list).await?;

        tracing::info!(
            list_id = %list.id,
            plan_id = %list.nutrition_plan_id,
            items = list.items.len(),
            "Grocery list generated"
        );

        Ok(list)
    }

    /// Flip the `checked` flag of the item named `item_name` (case-insensitive).
    #[tracing::instrument(skip(self))]
    pub async fn toggle_item(
        &self,
        user_id: &str,
        id: &str,
        item_name: &str,
    ) -> fitcoach_shared::Result<GroceryList> {
        let key = item_name.trim().to_lowercase();

        self.modify(
            user_id,
            id,
            Box::new(move |list: &mut GroceryList| {
                let Some(item) = list
                    .items
                    .iter_mut()
                    .find(|item| item.name.trim().to_lowercase() == key)
                else {
                    fitcoach_shared::not_found!("Grocery list item");
                };

                item.checked = !item.checked;

                Ok(true)
            }),
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn set_completed(
        &self,
        user_id: &str,
        id: &str,
        is_completed: bool,
    ) -> fitcoach_shared::Result<GroceryList> {
        self.modify(
            user_id,
            id,
            Box::new(move |list: &mut GroceryList| {
                if list.is_completed == is_completed {
                    return Ok(false);
                }

                list.is_completed = is_completed;

                Ok(true)
            }),
        )
        .await
    }

    /// Uncheck every item and reopen the list.
    #[tracing::instrument(skip(self))]
    pub async fn reset(&self, user_id: &str, id: &str) -> fitcoach_shared::Result<GroceryList> {
        self.modify(
            user_id,
            id,
            Box::new(|list: &mut GroceryList| {
                for item in list.items.iter_mut() {
                    item.checked = false;
                }
                list.is_completed = false;

                Ok(true)
            }),
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, user_id: &str, id: &str) -> fitcoach_shared::Result<()> {
        if !self.lists.delete(user_id, id).await? {
            fitcoach_shared::not_found!("Grocery list");
        }

        tracing::info!("Grocery list deleted");

        Ok(())
    }

    async fn modify(
        &self,
        user_id: &str,
        id: &str,
        change: ListChange,
    ) -> fitcoach_shared::Result<GroceryList> {
        match self.lists.modify(user_id, id, change).await? {
            Some(list) => Ok(list),
            None => fitcoach_shared::not_found!("Grocery list"),
        }
    }
}

fn display_name(plan_name: Option<&str>, now: OffsetDateTime) -> String {
    match plan_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("{name} Grocery List"),
        None => format!(
            "Grocery List - {}-{:02}-{:02}",
            now.year(),
            u8::from(now.month()),
            now.day()
        ),
    }
}
