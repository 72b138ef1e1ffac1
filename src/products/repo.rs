use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::ProductPatch;

/// Product row. A product belongs to exactly one owner.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

const PRODUCT_COLUMNS: &str = "id, name, description, owner_id, created_at, updated_at";

pub async fn list_by_owner(db: &PgPool, owner_id: Uuid) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(&format!(
        r#"
        SELECT {PRODUCT_COLUMNS}
        FROM products
        WHERE owner_id = $1
        ORDER BY updated_at DESC
        "#,
    ))
    .bind(owner_id)
    .fetch_all(db)
    .await
}

pub async fn find_owned(
    db: &PgPool,
    product_id: Uuid,
    owner_id: Uuid,
) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(&format!(
        r#"
        SELECT {PRODUCT_COLUMNS}
        FROM products
        WHERE id = $1 AND owner_id = $2
        "#,
    ))
    .bind(product_id)
    .bind(owner_id)
    .fetch_optional(db)
    .await
}

pub async fn create(
    db: &PgPool,
    owner_id: Uuid,
    name: &str,
    description: Option<&str>,
) -> Result<Product, sqlx::Error> {
    sqlx::query_as::<_, Product>(&format!(
        r#"
        INSERT INTO products (name, description, owner_id)
        VALUES ($1, $2, $3)
        RETURNING {PRODUCT_COLUMNS}
        "#,
    ))
    .bind(name)
    .bind(description)
    .bind(owner_id)
    .fetch_one(db)
    .await
}

/// Applies only the submitted fields. `name` is COALESCEd (not nullable);
/// `description` uses a presence flag so an explicit null clears it while
/// an absent field leaves it untouched.
pub async fn update(
    db: &PgPool,
    product_id: Uuid,
    owner_id: Uuid,
    patch: &ProductPatch,
) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(&format!(
        r#"
        UPDATE products SET
            name        = COALESCE($3, name),
            description = CASE WHEN $4 THEN $5 ELSE description END,
            updated_at  = now()
        WHERE id = $1 AND owner_id = $2
        RETURNING {PRODUCT_COLUMNS}
        "#,
    ))
    .bind(product_id)
    .bind(owner_id)
    .bind(patch.name.as_deref())
    .bind(patch.description.is_some())
    .bind(patch.description.clone().flatten())
    .fetch_optional(db)
    .await
}

/// Hard delete; ideas go with it via ON DELETE CASCADE. Returns whether a
/// row was actually removed, so a repeat call is a no-op yielding false.
pub async fn delete(db: &PgPool, product_id: Uuid, owner_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM products
        WHERE id = $1 AND owner_id = $2
        "#,
    )
    .bind(product_id)
    .bind(owner_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}
