pub mod dto;
pub mod handlers;
pub mod repo;

use axum::Router;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::read_routes())
        .merge(handlers::write_routes())
}

/// Access-control gate: every product-scoped operation resolves ownership
/// here first. A product that does not exist and a product owned by
/// someone else produce the same `Unauthorized` signal, so existence of
/// other tenants' products never leaks.
pub async fn ensure_product_access(
    db: &PgPool,
    actor_id: Uuid,
    product_id: Uuid,
) -> Result<repo::Product, ApiError> {
    repo::find_owned(db, product_id, actor_id)
        .await?
        .ok_or(ApiError::Unauthorized)
}
