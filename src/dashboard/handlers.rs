use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{auth::AuthUser, error::ApiError, products::ensure_product_access, state::AppState};

use super::dto::DashboardResponse;
use super::repo;

const TOP_IDEAS_LIMIT: i64 = 5;

pub fn routes() -> Router<AppState> {
    Router::new().route("/products/:id/dashboard", get(get_dashboard))
}

#[instrument(skip(state))]
async fn get_dashboard(
    State(state): State<AppState>,
    AuthUser(actor_id): AuthUser,
    Path(product_id): Path<Uuid>,
) -> Result<Json<DashboardResponse>, ApiError> {
    ensure_product_access(&state.db, actor_id, product_id).await?;
    let by_status = repo::count_by_status(&state.db, product_id).await?;
    let by_funnel_stage = repo::count_by_funnel_stage(&state.db, product_id).await?;
    let top_ideas = repo::top_by_score(&state.db, product_id, TOP_IDEAS_LIMIT).await?;
    Ok(Json(DashboardResponse {
        by_status,
        by_funnel_stage,
        top_ideas,
    }))
}
