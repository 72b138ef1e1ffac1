use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::ideas::repo::IDEA_COLUMNS;
use crate::ideas::types::{FunnelStage, Idea, IdeaStatus};

/// One observed status bucket. Statuses with no ideas are not reported.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StatusCount {
    pub status: IdeaStatus,
    pub count: i64,
}

/// One observed funnel-stage bucket; `funnel_stage: None` is the bucket
/// for ideas with no stage assigned.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StageCount {
    pub funnel_stage: Option<FunnelStage>,
    pub count: i64,
}

pub async fn count_by_status(
    db: &PgPool,
    product_id: Uuid,
) -> Result<Vec<StatusCount>, sqlx::Error> {
    sqlx::query_as::<_, StatusCount>(
        r#"
        SELECT status, COUNT(*) AS count
        FROM ideas
        WHERE product_id = $1
        GROUP BY status
        "#,
    )
    .bind(product_id)
    .fetch_all(db)
    .await
}

pub async fn count_by_funnel_stage(
    db: &PgPool,
    product_id: Uuid,
) -> Result<Vec<StageCount>, sqlx::Error> {
    sqlx::query_as::<_, StageCount>(
        r#"
        SELECT funnel_stage, COUNT(*) AS count
        FROM ideas
        WHERE product_id = $1
        GROUP BY funnel_stage
        "#,
    )
    .bind(product_id)
    .fetch_all(db)
    .await
}

/// Top ideas by the impact×ease key, descending. Zero-score ideas may
/// fill the tail; hiding them is a presentation concern, not this
/// query's.
pub async fn top_by_score(
    db: &PgPool,
    product_id: Uuid,
    limit: i64,
) -> Result<Vec<Idea>, sqlx::Error> {
    sqlx::query_as::<_, Idea>(&format!(
        r#"
        SELECT {IDEA_COLUMNS}
        FROM ideas
        WHERE product_id = $1
        ORDER BY COALESCE(impact, 0) * COALESCE(ease, 0) DESC, created_at DESC
        LIMIT $2
        "#,
    ))
    .bind(product_id)
    .bind(limit)
    .fetch_all(db)
    .await
}
