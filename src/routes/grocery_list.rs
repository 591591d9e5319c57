use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use fitcoach_shared::grocery::GroceryList;
use serde::Deserialize;

use crate::error::AppError;
use crate::routes::{AppState, UserParams};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBody {
    #[serde(alias = "user_id")]
    pub user_id: String,
    #[serde(alias = "plan_id")]
    pub plan_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleBody {
    #[serde(alias = "user_id")]
    pub user_id: String,
    #[serde(alias = "itemName")]
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteBody {
    #[serde(alias = "user_id")]
    pub user_id: String,
    #[serde(alias = "is_completed")]
    pub is_completed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    #[serde(alias = "user_id")]
    pub user_id: String,
}

/// POST /api/grocery-lists
///
/// Derives a grocery list from the given plan, or the user's latest plan
/// when `planId` is absent.
#[tracing::instrument(skip(state, body), fields(user_id = %body.user_id))]
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateBody>,
) -> Result<(StatusCode, Json<GroceryList>), AppError> {
    let list = state
        .grocery_command
        .generate(fitcoach_grocery::GenerateInput {
            user_id: body.user_id,
            plan_id: body.plan_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(list)))
}

/// GET /api/grocery-lists?user_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
) -> Result<Json<Vec<GroceryList>>, AppError> {
    Ok(Json(state.grocery_query.list(&params.user_id).await?))
}

/// GET /api/grocery-lists/{id}?user_id=
pub async fn find(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserParams>,
) -> Result<Json<GroceryList>, AppError> {
    state
        .grocery_query
        .find(&params.user_id, &id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Grocery list not found".to_owned()))
}

pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ToggleBody>,
) -> Result<Json<GroceryList>, AppError> {
    let list = state
        .grocery_command
        .toggle_item(&body.user_id, &id, &body.name)
        .await?;

    Ok(Json(list))
}

pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<CompleteBody>,
) -> Result<Json<GroceryList>, AppError> {
    let list = state
        .grocery_command
        .set_completed(&body.user_id, &id, body.is_completed)
        .await?;

    Ok(Json(list))
}

pub async fn reset(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UserBody>,
) -> Result<Json<GroceryList>, AppError> {
    Ok(Json(state.grocery_command.reset(&body.user_id, &id).await?))
}

/// DELETE /api/grocery-lists/{id}?user_id=
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserParams>,
) -> Result<StatusCode, AppError> {
    state.grocery_command.delete(&params.user_id, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
