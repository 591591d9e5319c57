use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;
use sqlx::SqlitePool;

mod grocery_list;
mod health;
mod nutrition_plan;

pub type GroceryCommand =
    fitcoach_grocery::Command<fitcoach_nutrition::Query, fitcoach_grocery::Repository>;
pub type GroceryQuery = fitcoach_grocery::Query<fitcoach_grocery::Repository>;

#[derive(Clone)]
pub struct AppState {
    pub nutrition_command: fitcoach_nutrition::Command,
    pub nutrition_query: fitcoach_nutrition::Query,
    pub grocery_command: GroceryCommand,
    pub grocery_query: GroceryQuery,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(state: fitcoach_shared::State) -> Self {
        Self {
            nutrition_command: fitcoach_nutrition::Command(state.clone()),
            nutrition_query: fitcoach_nutrition::Query(state.clone()),
            grocery_command: fitcoach_grocery::Command::sqlite(state.clone()),
            grocery_query: fitcoach_grocery::Query::sqlite(state.clone()),
            pool: state.read_db,
        }
    }
}

/// `?user_id=` on read and delete endpoints.
#[derive(Deserialize)]
pub struct UserParams {
    #[serde(alias = "userId")]
    pub user_id: String,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route(
            "/api/nutrition-plans",
            get(nutrition_plan::list).post(nutrition_plan::create),
        )
        .route("/api/nutrition-plans/{id}", get(nutrition_plan::find))
        .route(
            "/api/grocery-lists",
            get(grocery_list::list).post(grocery_list::generate),
        )
        .route(
            "/api/grocery-lists/{id}",
            get(grocery_list::find).delete(grocery_list::delete),
        )
        .route("/api/grocery-lists/{id}/toggle", post(grocery_list::toggle))
        .route(
            "/api/grocery-lists/{id}/complete",
            post(grocery_list::complete),
        )
        .route("/api/grocery-lists/{id}/reset", post(grocery_list::reset))
        .with_state(app_state)
}
