use serde::{Deserialize, Serialize};

use crate::OrderedMap;

/// A single meal of a day's schedule.
///
/// Only `ingredients` is read by the grocery pipeline. The descriptive fields
/// are kept as raw JSON since generators emit both `450` and `"450 kcal"`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Meal {
    #[serde(default)]
    pub name: Option<serde_json::Value>,
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub calories: Option<serde_json::Value>,
    #[serde(default)]
    pub protein: Option<serde_json::Value>,
    #[serde(default)]
    pub carbs: Option<serde_json::Value>,
    #[serde(default)]
    pub fats: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DayMeals {
    #[serde(default)]
    pub breakfast: Option<Meal>,
    #[serde(default)]
    pub lunch: Option<Meal>,
    #[serde(default)]
    pub dinner: Option<Meal>,
    #[serde(default)]
    pub snacks: Option<Vec<Option<Meal>>>,
}

impl DayMeals {
    /// Breakfast, lunch, dinner then snacks, skipping absent meals.
    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        [&self.breakfast, &self.lunch, &self.dinner]
            .into_iter()
            .chain(self.snacks.iter().flatten())
            .flatten()
    }
}

/// Weekly plan document as produced by the plan generator.
///
/// Only the fields the grocery pipeline reads are modeled; everything else
/// in the stored document is ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NutritionPlan {
    #[serde(default)]
    pub daily_schedule: Option<OrderedMap<Option<DayMeals>>>,
    #[serde(default)]
    pub shopping_list: Option<OrderedMap<Vec<String>>>,
}

/// Stored nutrition plan row.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NutritionPlanRecord {
    pub id: String,
    pub user_id: String,
    pub name: Option<String>,
    pub plan: serde_json::Value,
    pub created_at: i64,
}
