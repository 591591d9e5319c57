use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use fitcoach_shared::nutrition::NutritionPlanRecord;
use serde::Deserialize;

use crate::error::AppError;
use crate::routes::{AppState, UserParams};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBody {
    #[serde(alias = "user_id")]
    pub user_id: String,
    pub name: Option<String>,
    pub plan: serde_json::Value,
}

/// POST /api/nutrition-plans
#[tracing::instrument(skip(state, body), fields(user_id = %body.user_id))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateBody>,
) -> Result<(StatusCode, Json<NutritionPlanRecord>), AppError> {
    let record = state
        .nutrition_command
        .create(fitcoach_nutrition::CreateInput {
            user_id: body.user_id,
            name: body.name,
            plan: body.plan,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/nutrition-plans?user_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
) -> Result<Json<Vec<NutritionPlanRecord>>, AppError> {
    Ok(Json(state.nutrition_query.list(&params.user_id).await?))
}

/// GET /api/nutrition-plans/{id}?user_id=
pub async fn find(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserParams>,
) -> Result<Json<NutritionPlanRecord>, AppError> {
    state
        .nutrition_query
        .find(&params.user_id, &id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Nutrition plan not found".to_owned()))
}
