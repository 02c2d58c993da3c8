use serde::Serialize;
use ts_rs::TS;

use crate::models::assignments::responses::ClassifiedAssignment;
use crate::models::users::entities::Enrollment;

/// 课程卡片
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseResponse {
    pub id: String,
    pub code: String,
    pub name: String,
    pub semester: String,
    pub color: String,
    // 未提交且未逾期的作业数
    pub assignments_due: usize,
    pub student_count: u32,
    pub grade: Option<f64>,
    pub upcoming_assignments: Vec<ClassifiedAssignment>,
}

/// 单门课程：卡片加上教学人员与选课人数
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseDetailResponse {
    #[serde(flatten)]
    pub course: CourseResponse,
    pub staff: Vec<Enrollment>,
    pub enrolled_students: usize,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListResponse {
    pub items: Vec<CourseResponse>,
    pub total: usize,
}
