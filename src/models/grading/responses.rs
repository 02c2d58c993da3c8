use serde::Serialize;
use ts_rs::TS;

use crate::calc::TimelineNode;
use crate::models::assignments::entities::SubmissionStatus;
use crate::models::grading::entities::{GradingField, Student};

/// 当前评分的作业
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct GradingAssignmentInfo {
    pub id: String,
    pub name: String,
    pub course_code: String,
    pub points: f64,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 名单列表项
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct RosterItem {
    pub index: usize,
    pub id: String,
    pub name: String,
    pub initials: String,
    pub submission_status: SubmissionStatus,
    pub is_selected: bool,
}

/// 草稿内容
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct DraftView {
    pub points: String,
    pub feedback: String,
}

/// 当前选中学生的详情
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct SelectedStudentView {
    pub student: Student,
    pub draft: DraftView,
    // “Submitted Feb 5, 2025 at 3:04 PM” 或 “No submission received”
    pub submitted_label: String,
    pub is_late: bool,
    // 无文件时输入框禁用
    pub can_grade: bool,
    pub timeline: Vec<TimelineNode>,
}

/// 评分界面状态
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct GradingSessionResponse {
    pub assignment: GradingAssignmentInfo,
    pub roster: Vec<RosterItem>,
    pub selected_index: usize,
    pub selected: SelectedStudentView,
    // “1 of 5”
    pub position_label: String,
    pub has_previous: bool,
    pub has_next: bool,
    pub saved_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// 草稿编辑结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct DraftEditResponse {
    pub student_id: String,
    pub field: GradingField,
    pub revision: u64,
    // 空闲多久后自动保存（毫秒）
    pub autosave_in_ms: u64,
}
