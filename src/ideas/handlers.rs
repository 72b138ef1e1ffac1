use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::AuthUser, error::ApiError, products::dto::DeleteResponse,
    products::ensure_product_access, state::AppState,
};

use super::dto::{CreateIdeaRequest, IdeaPatch, ListIdeasQuery};
use super::repo;
use super::sort::IdeaFilters;
use super::types::Idea;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/products/:id/ideas", get(list_ideas))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/products/:id/ideas", post(create_idea))
        .route(
            "/products/:id/ideas/:idea_id",
            axum::routing::patch(update_idea).delete(delete_idea),
        )
}

#[instrument(skip(state))]
async fn list_ideas(
    State(state): State<AppState>,
    AuthUser(actor_id): AuthUser,
    Path(product_id): Path<Uuid>,
    Query(query): Query<ListIdeasQuery>,
) -> Result<Json<Vec<Idea>>, ApiError> {
    ensure_product_access(&state.db, actor_id, product_id).await?;
    let filters = IdeaFilters {
        status: query.status,
        funnel_stage: query.funnel_stage,
        confidence_basis: query.confidence_basis,
    };
    let ideas = repo::list_by_product(
        &state.db,
        product_id,
        query.sort_field,
        query.sort_direction,
        &filters,
    )
    .await?;
    Ok(Json(ideas))
}

#[instrument(skip(state, payload))]
async fn create_idea(
    State(state): State<AppState>,
    AuthUser(actor_id): AuthUser,
    Path(product_id): Path<Uuid>,
    Json(payload): Json<CreateIdeaRequest>,
) -> Result<(StatusCode, Json<Idea>), ApiError> {
    ensure_product_access(&state.db, actor_id, product_id).await?;
    payload.validate()?;
    let idea = repo::create(&state.db, product_id, &payload).await?;
    info!(idea_id = %idea.id, %product_id, "idea created");
    Ok((StatusCode::CREATED, Json(idea)))
}

#[instrument(skip(state, payload))]
async fn update_idea(
    State(state): State<AppState>,
    AuthUser(actor_id): AuthUser,
    Path((product_id, idea_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<IdeaPatch>,
) -> Result<Json<Idea>, ApiError> {
    ensure_product_access(&state.db, actor_id, product_id).await?;
    payload.validate()?;
    let idea = repo::update(&state.db, product_id, idea_id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(idea))
}

#[instrument(skip(state))]
async fn delete_idea(
    State(state): State<AppState>,
    AuthUser(actor_id): AuthUser,
    Path((product_id, idea_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<DeleteResponse>, ApiError> {
    ensure_product_access(&state.db, actor_id, product_id).await?;
    let deleted = repo::delete(&state.db, product_id, idea_id).await?;
    if deleted {
        info!(%idea_id, %product_id, "idea deleted");
    }
    Ok(Json(DeleteResponse { deleted }))
}
