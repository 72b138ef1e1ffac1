use serde::Deserialize;

use crate::error::ValidationError;
use crate::validation::{check_max_len, check_range, double_option, require_len};

use super::sort::{IdeaSortField, SortDirection};
use super::types::{ConfidenceBasis, FunnelStage, IdeaStatus};

pub const IDEA_NAME_MAX: usize = 200;
pub const PROBLEM_MAX: usize = 1000;
pub const SMALLEST_TEST_MAX: usize = 500;
pub const EVIDENCE_MAX: usize = 2000;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIdeaRequest {
    pub name: String,
    pub problem: String,
    #[serde(default)]
    pub funnel_stage: Option<FunnelStage>,
    #[serde(default)]
    pub impact: Option<i32>,
    #[serde(default)]
    pub ease: Option<i32>,
    #[serde(default)]
    pub confidence_basis: Option<ConfidenceBasis>,
    #[serde(default)]
    pub smallest_test: Option<String>,
    #[serde(default)]
    pub status: IdeaStatus,
    #[serde(default)]
    pub evidence: Option<String>,
}

impl CreateIdeaRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_len("name", &self.name, 1, IDEA_NAME_MAX)?;
        require_len("problem", &self.problem, 1, PROBLEM_MAX)?;
        check_range("impact", self.impact, 1, 10)?;
        check_range("ease", self.ease, 1, 10)?;
        check_max_len("smallestTest", self.smallest_test.as_deref(), SMALLEST_TEST_MAX)?;
        check_max_len("evidence", self.evidence.as_deref(), EVIDENCE_MAX)?;
        Ok(())
    }
}

/// Partial update. Every field is individually optional; for nullable
/// fields an absent key leaves the value untouched while an explicit
/// null clears it.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub funnel_stage: Option<Option<FunnelStage>>,
    #[serde(default, deserialize_with = "double_option")]
    pub impact: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub ease: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub confidence_basis: Option<Option<ConfidenceBasis>>,
    #[serde(default, deserialize_with = "double_option")]
    pub smallest_test: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<IdeaStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub evidence: Option<Option<String>>,
}

impl IdeaPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            require_len("name", name, 1, IDEA_NAME_MAX)?;
        }
        if let Some(problem) = &self.problem {
            require_len("problem", problem, 1, PROBLEM_MAX)?;
        }
        check_range("impact", self.impact.flatten(), 1, 10)?;
        check_range("ease", self.ease.flatten(), 1, 10)?;
        check_max_len(
            "smallestTest",
            self.smallest_test.as_ref().and_then(|v| v.as_deref()),
            SMALLEST_TEST_MAX,
        )?;
        check_max_len(
            "evidence",
            self.evidence.as_ref().and_then(|v| v.as_deref()),
            EVIDENCE_MAX,
        )?;
        Ok(())
    }
}

/// Query string for GET /products/:id/ideas.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListIdeasQuery {
    #[serde(default)]
    pub sort_field: IdeaSortField,
    #[serde(default)]
    pub sort_direction: SortDirection,
    #[serde(default)]
    pub status: Option<IdeaStatus>,
    #[serde(default)]
    pub funnel_stage: Option<FunnelStage>,
    #[serde(default)]
    pub confidence_basis: Option<ConfidenceBasis>,
}
