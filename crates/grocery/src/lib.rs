pub mod aggregation;
pub mod categorization;
mod command;
pub mod normalizer;
mod query;
mod repository;
mod store;

pub use aggregation::{GroceryListBuilder, extract_items};
pub use categorization::categorize;
pub use command::*;
pub use normalizer::{normalize, title_case};
pub use query::Query;
pub use repository::Repository;
pub use store::{GroceryListStore, ListChange, PlanSource};
