use serde::Deserialize;

use crate::calc::DueProximity;
use crate::models::assignments::entities::SubmissionStatus;

/// 作业列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignmentListQuery {
    pub course_id: Option<String>,
    pub proximity: Option<DueProximity>,
    pub status: Option<SubmissionStatus>,
}
