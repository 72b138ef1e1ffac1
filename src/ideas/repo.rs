use sqlx::PgPool;
use uuid::Uuid;

use super::dto::{CreateIdeaRequest, IdeaPatch};
use super::sort::{IdeaFilters, IdeaSortField, SortDirection};
use super::types::Idea;

pub(crate) const IDEA_COLUMNS: &str = "id, product_id, name, problem, funnel_stage, impact, \
     ease, confidence_basis, smallest_test, status, evidence, created_at, updated_at";

/// Lists a product's ideas with optional exact-match filters (ANDed) and
/// the requested ordering. Filters are bound as nullable parameters so
/// the statement stays static.
pub async fn list_by_product(
    db: &PgPool,
    product_id: Uuid,
    sort_field: IdeaSortField,
    direction: SortDirection,
    filters: &IdeaFilters,
) -> Result<Vec<Idea>, sqlx::Error> {
    let sql = format!(
        r#"
        SELECT {IDEA_COLUMNS}
        FROM ideas
        WHERE product_id = $1
          AND ($2::text IS NULL OR status = $2)
          AND ($3::text IS NULL OR funnel_stage = $3)
          AND ($4::text IS NULL OR confidence_basis = $4)
        ORDER BY {order}
        "#,
        order = sort_field.order_by(direction),
    );
    sqlx::query_as::<_, Idea>(&sql)
        .bind(product_id)
        .bind(filters.status)
        .bind(filters.funnel_stage)
        .bind(filters.confidence_basis)
        .fetch_all(db)
        .await
}

pub async fn create(
    db: &PgPool,
    product_id: Uuid,
    input: &CreateIdeaRequest,
) -> Result<Idea, sqlx::Error> {
    sqlx::query_as::<_, Idea>(&format!(
        r#"
        INSERT INTO ideas (product_id, name, problem, funnel_stage, impact, ease,
                           confidence_basis, smallest_test, status, evidence)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING {IDEA_COLUMNS}
        "#,
    ))
    .bind(product_id)
    .bind(&input.name)
    .bind(&input.problem)
    .bind(input.funnel_stage)
    .bind(input.impact)
    .bind(input.ease)
    .bind(input.confidence_basis)
    .bind(input.smallest_test.as_deref())
    .bind(input.status)
    .bind(input.evidence.as_deref())
    .fetch_one(db)
    .await
}

/// Applies only the submitted fields. Required columns are COALESCEd;
/// nullable columns take a (presence, value) pair so an explicit null
/// clears them while an absent field is a no-op. updated_at is bumped on
/// every hit. None means the idea does not exist under this product.
pub async fn update(
    db: &PgPool,
    product_id: Uuid,
    idea_id: Uuid,
    patch: &IdeaPatch,
) -> Result<Option<Idea>, sqlx::Error> {
    sqlx::query_as::<_, Idea>(&format!(
        r#"
        UPDATE ideas SET
            name             = COALESCE($3, name),
            problem          = COALESCE($4, problem),
            status           = COALESCE($5, status),
            funnel_stage     = CASE WHEN $6  THEN $7  ELSE funnel_stage END,
            impact           = CASE WHEN $8  THEN $9  ELSE impact END,
            ease             = CASE WHEN $10 THEN $11 ELSE ease END,
            confidence_basis = CASE WHEN $12 THEN $13 ELSE confidence_basis END,
            smallest_test    = CASE WHEN $14 THEN $15 ELSE smallest_test END,
            evidence         = CASE WHEN $16 THEN $17 ELSE evidence END,
            updated_at       = now()
        WHERE id = $2 AND product_id = $1
        RETURNING {IDEA_COLUMNS}
        "#,
    ))
    .bind(product_id)
    .bind(idea_id)
    .bind(patch.name.as_deref())
    .bind(patch.problem.as_deref())
    .bind(patch.status)
    .bind(patch.funnel_stage.is_some())
    .bind(patch.funnel_stage.flatten())
    .bind(patch.impact.is_some())
    .bind(patch.impact.flatten())
    .bind(patch.ease.is_some())
    .bind(patch.ease.flatten())
    .bind(patch.confidence_basis.is_some())
    .bind(patch.confidence_basis.flatten())
    .bind(patch.smallest_test.is_some())
    .bind(patch.smallest_test.clone().flatten())
    .bind(patch.evidence.is_some())
    .bind(patch.evidence.clone().flatten())
    .fetch_optional(db)
    .await
}

/// Idempotent delete scoped by the owning product.
pub async fn delete(db: &PgPool, product_id: Uuid, idea_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM ideas
        WHERE id = $1 AND product_id = $2
        "#,
    )
    .bind(idea_id)
    .bind(product_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}
