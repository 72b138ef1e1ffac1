use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{auth::AuthUser, error::ApiError, state::AppState};

use super::dto::{CreateProductRequest, DeleteResponse, ProductPatch};
use super::repo::{self, Product};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product))
        .route(
            "/products/:id",
            axum::routing::patch(update_product).delete(delete_product),
        )
}

#[instrument(skip(state))]
async fn list_products(
    State(state): State<AppState>,
    AuthUser(actor_id): AuthUser,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = repo::list_by_owner(&state.db, actor_id).await?;
    Ok(Json(products))
}

#[instrument(skip(state))]
async fn get_product(
    State(state): State<AppState>,
    AuthUser(actor_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, ApiError> {
    let product = super::ensure_product_access(&state.db, actor_id, id).await?;
    Ok(Json(product))
}

#[instrument(skip(state, payload))]
async fn create_product(
    State(state): State<AppState>,
    AuthUser(actor_id): AuthUser,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    payload.validate()?;
    let product = repo::create(
        &state.db,
        actor_id,
        &payload.name,
        payload.description.as_deref(),
    )
    .await?;
    info!(product_id = %product.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

#[instrument(skip(state, payload))]
async fn update_product(
    State(state): State<AppState>,
    AuthUser(actor_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductPatch>,
) -> Result<Json<Product>, ApiError> {
    payload.validate()?;
    // The UPDATE is scoped by owner_id, so zero rows means missing or
    // foreign either way.
    let product = repo::update(&state.db, id, actor_id, &payload)
        .await?
        .ok_or(ApiError::Unauthorized)?;
    Ok(Json(product))
}

#[instrument(skip(state))]
async fn delete_product(
    State(state): State<AppState>,
    AuthUser(actor_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = repo::delete(&state.db, id, actor_id).await?;
    if deleted {
        info!(product_id = %id, "product deleted");
    }
    Ok(Json(DeleteResponse { deleted }))
}
