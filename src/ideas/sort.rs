//! Sort-key dispatch for idea listings.
//!
//! The sortable fields form a closed set, so the ORDER BY clause is
//! assembled from static fragments only and never from caller strings.

use serde::Deserialize;

use super::types::{ConfidenceBasis, FunnelStage, IdeaStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdeaSortField {
    Impact,
    Ease,
    /// Derived key: COALESCE(impact,0) * COALESCE(ease,0).
    ImpactEase,
    ConfidenceBasis,
    Status,
    FunnelStage,
    #[default]
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    fn sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl IdeaSortField {
    /// ORDER BY clause for this key. Nullable columns sort NULLS LAST in
    /// both directions; every key except createdAt gets a created_at DESC
    /// tiebreak so listings are deterministic.
    pub fn order_by(self, direction: SortDirection) -> String {
        let dir = direction.sql();
        match self {
            IdeaSortField::ImpactEase => {
                format!("COALESCE(impact, 0) * COALESCE(ease, 0) {dir}, created_at DESC")
            }
            IdeaSortField::CreatedAt => format!("created_at {dir}"),
            IdeaSortField::Status => format!("status {dir}, created_at DESC"),
            IdeaSortField::Impact => format!("impact {dir} NULLS LAST, created_at DESC"),
            IdeaSortField::Ease => format!("ease {dir} NULLS LAST, created_at DESC"),
            IdeaSortField::ConfidenceBasis => {
                format!("confidence_basis {dir} NULLS LAST, created_at DESC")
            }
            IdeaSortField::FunnelStage => {
                format!("funnel_stage {dir} NULLS LAST, created_at DESC")
            }
        }
    }
}

/// Optional exact-match restrictions, combined with AND.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaFilters {
    #[serde(default)]
    pub status: Option<IdeaStatus>,
    #[serde(default)]
    pub funnel_stage: Option<FunnelStage>,
    #[serde(default)]
    pub confidence_basis: Option<ConfidenceBasis>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sort_is_created_at_desc() {
        assert_eq!(IdeaSortField::default(), IdeaSortField::CreatedAt);
        assert_eq!(SortDirection::default(), SortDirection::Desc);
        assert_eq!(
            IdeaSortField::default().order_by(SortDirection::default()),
            "created_at DESC"
        );
    }

    #[test]
    fn impact_ease_uses_coalesced_product_with_tiebreak() {
        assert_eq!(
            IdeaSortField::ImpactEase.order_by(SortDirection::Desc),
            "COALESCE(impact, 0) * COALESCE(ease, 0) DESC, created_at DESC"
        );
        assert_eq!(
            IdeaSortField::ImpactEase.order_by(SortDirection::Asc),
            "COALESCE(impact, 0) * COALESCE(ease, 0) ASC, created_at DESC"
        );
    }

    #[test]
    fn nullable_columns_pin_nulls_last_in_both_directions() {
        for field in [
            IdeaSortField::Impact,
            IdeaSortField::Ease,
            IdeaSortField::ConfidenceBasis,
            IdeaSortField::FunnelStage,
        ] {
            assert!(field.order_by(SortDirection::Asc).contains("NULLS LAST"));
            assert!(field.order_by(SortDirection::Desc).contains("NULLS LAST"));
        }
    }

    #[test]
    fn sort_field_parses_camel_case_labels() {
        let field: IdeaSortField = serde_json::from_str(r#""impactEase""#).unwrap();
        assert_eq!(field, IdeaSortField::ImpactEase);
        let field: IdeaSortField = serde_json::from_str(r#""createdAt""#).unwrap();
        assert_eq!(field, IdeaSortField::CreatedAt);
        assert!(serde_json::from_str::<IdeaSortField>(r#""score""#).is_err());
    }
}
