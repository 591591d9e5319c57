use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Grocery aisle grouping.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Proteins,
    Dairy,
    Vegetables,
    Fruits,
    Grains,
    Pantry,
    Other,
}

/// One line of a grocery list.
///
/// `category` is kept as a string: entries folded in from a plan's own
/// shopping list carry that list's category name verbatim.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GroceryListItem {
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default)]
    pub checked: bool,
}

impl GroceryListItem {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: None,
            checked: false,
        }
    }

    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }
}

/// Persisted grocery list as returned to API callers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GroceryList {
    pub id: String,
    pub user_id: String,
    pub nutrition_plan_id: String,
    pub name: String,
    pub items: Vec<GroceryListItem>,
    pub is_completed: bool,
    pub created_at: i64,
}
