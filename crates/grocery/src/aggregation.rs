use std::collections::HashMap;
use std::collections::hash_map::Entry;

use fitcoach_shared::grocery::GroceryListItem;
use fitcoach_shared::nutrition::NutritionPlan;

use crate::categorization::categorize;
use crate::normalizer::{normalize, title_case};

/// Names shorter than this (in characters) are treated as noise.
const MIN_KEY_LEN: usize = 2;

/// Deduplicating grocery list accumulator.
///
/// Entries are keyed by lowercased name and inserted only when absent, so the
/// first mention of an ingredient decides its category and quantity hint.
/// Later duplicates are dropped, their quantities are not summed.
#[derive(Default)]
pub struct GroceryListBuilder {
    items: HashMap<String, GroceryListItem>,
}

impl GroceryListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw ingredient mention from a meal.
    ///
    /// Returns `false` when the mention was dropped as noise or duplicate.
    pub fn add_mention(&mut self, raw: &str) -> bool {
        let normalized = normalize(raw);
        let key = normalized.to_lowercase();

        if key.chars().count() < MIN_KEY_LEN {
            return false;
        }

        match self.items.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                let category = categorize(&normalized);
                entry.insert(
                    GroceryListItem::new(title_case(&normalized), category.to_string())
                        .with_quantity(raw),
                );
                true
            }
        }
    }

    /// Add an item from a plan's own shopping list, keeping its category name.
    ///
    /// Only the key is trimmed; the display name keeps the item text as written.
    pub fn add_declared(&mut self, category: &str, item: &str) -> bool {
        let key = item.trim().to_lowercase();

        if key.chars().count() < MIN_KEY_LEN {
            return false;
        }

        match self.items.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(GroceryListItem::new(title_case(item), category));
                true
            }
        }
    }

    /// Walk every meal of every day in document order.
    pub fn add_schedule(&mut self, plan: &NutritionPlan) {
        let Some(schedule) = &plan.daily_schedule else {
            return;
        };

        for (_, day) in schedule.iter() {
            let Some(day) = day else {
                continue;
            };

            for meal in day.meals() {
                for raw in meal.ingredients.iter().flatten() {
                    self.add_mention(raw);
                }
            }
        }
    }

    pub fn add_shopping_list(&mut self, plan: &NutritionPlan) {
        let Some(shopping_list) = &plan.shopping_list else {
            return;
        };

        for (category, items) in shopping_list.iter() {
            for item in items {
                self.add_declared(category, item);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items ordered by category, then name.
    pub fn build(self) -> Vec<GroceryListItem> {
        let mut entries: Vec<(String, GroceryListItem)> = self.items.into_iter().collect();

        entries.sort_by(|(a_key, a), (b_key, b)| {
            a.category
                .cmp(&b.category)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a_key.cmp(b_key))
        });

        entries.into_iter().map(|(_, item)| item).collect()
    }
}

/// Derive the grocery list of a nutrition plan.
///
/// Schedule ingredients come first, then the plan's declared shopping list
/// fills in whatever the schedule did not mention.
pub fn extract_items(plan: &NutritionPlan) -> Vec<GroceryListItem> {
    let mut builder = GroceryListBuilder::new();
    builder.add_schedule(plan);
    builder.add_shopping_list(plan);

    tracing::debug!(items = builder.len(), "Grocery items extracted");

    builder.build()
}
