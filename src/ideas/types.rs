use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Ordinal position of an idea in the validation funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text")]
pub enum FunnelStage {
    L1,
    L2,
    L3,
    L4,
    L5,
    L6,
    L7,
}

/// Strength of the evidence behind an idea, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text")]
pub enum ConfidenceBasis {
    Opinion,
    Anecdote,
    Data,
    Validated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text")]
pub enum IdeaStatus {
    #[default]
    Parked,
    Testing,
    Validated,
    Shipped,
    Killed,
}

/// Idea row. Reachable only through its owning product; there is no
/// owner column here, ownership is always resolved via the product.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: Uuid,
    pub product_id: Uuid,
    pub name: String,
    pub problem: String,
    pub funnel_stage: Option<FunnelStage>,
    pub impact: Option<i32>,
    pub ease: Option<i32>,
    pub confidence_basis: Option<ConfidenceBasis>,
    pub smallest_test: Option<String>,
    pub status: IdeaStatus,
    pub evidence: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Idea {
    /// Ranking score: impact × ease, with a missing factor counting as 0.
    pub fn score(&self) -> i32 {
        self.impact.unwrap_or(0) * self.ease.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(impact: Option<i32>, ease: Option<i32>) -> Idea {
        Idea {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            name: "Faster checkout".into(),
            problem: "Cart abandon".into(),
            funnel_stage: None,
            impact,
            ease,
            confidence_basis: None,
            smallest_test: None,
            status: IdeaStatus::Parked,
            evidence: None,
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn score_multiplies_impact_and_ease() {
        assert_eq!(idea(Some(8), Some(5)).score(), 40);
    }

    #[test]
    fn score_treats_missing_factor_as_zero() {
        assert_eq!(idea(Some(8), None).score(), 0);
        assert_eq!(idea(None, Some(5)).score(), 0);
        assert_eq!(idea(None, None).score(), 0);
    }

    #[test]
    fn status_defaults_to_parked() {
        assert_eq!(IdeaStatus::default(), IdeaStatus::Parked);
    }

    #[test]
    fn enums_serialize_as_their_labels() {
        assert_eq!(serde_json::to_string(&FunnelStage::L3).unwrap(), r#""L3""#);
        assert_eq!(
            serde_json::to_string(&ConfidenceBasis::Anecdote).unwrap(),
            r#""Anecdote""#
        );
        assert_eq!(
            serde_json::to_string(&IdeaStatus::Shipped).unwrap(),
            r#""Shipped""#
        );
    }

    #[test]
    fn out_of_set_enum_values_are_rejected_naming_the_allowed_set() {
        let err = serde_json::from_str::<IdeaStatus>(r#""Archived""#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Archived"));
        assert!(msg.contains("Parked"));
    }

    #[test]
    fn confidence_basis_orders_weakest_first() {
        assert!(ConfidenceBasis::Opinion < ConfidenceBasis::Anecdote);
        assert!(ConfidenceBasis::Data < ConfidenceBasis::Validated);
    }
}
