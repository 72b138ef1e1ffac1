use serde::Serialize;

use crate::ideas::types::Idea;

use super::repo::{StageCount, StatusCount};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub by_status: Vec<StatusCount>,
    pub by_funnel_stage: Vec<StageCount>,
    pub top_ideas: Vec<Idea>,
}
