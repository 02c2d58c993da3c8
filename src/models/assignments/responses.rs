use serde::Serialize;
use ts_rs::TS;

use chrono::{DateTime, Utc};

use crate::calc::{DayBoundary, DueProximity, classify_in, format_due_date_in, format_relative};
use crate::models::assignments::entities::{Assignment, SubmissionStatus};

/// 带有派生字段的作业（每次读取时基于当前时间重新计算）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct ClassifiedAssignment {
    pub id: String,
    pub course_id: String,
    pub course_code: String,
    pub course_color: String,
    pub name: String,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub status: SubmissionStatus,
    pub points: f64,
    pub earned_points: Option<f64>,
    pub is_overdue: bool,
    pub due_proximity: DueProximity,
    // “Today” / “Tomorrow” / “Friday, February 14” 等
    pub due_label: String,
    // “in 3 days” / “2 days ago” 等
    pub due_relative: String,
    // “90/100” 或 “100 pts”
    pub points_label: String,
}

impl ClassifiedAssignment {
    /// 基于当前时间计算派生字段
    pub fn classify(assignment: Assignment, now: &DateTime<Utc>, zone: &impl DayBoundary) -> Self {
        let classification = classify_in(&assignment.due_date, now, zone);
        Self {
            due_label: format_due_date_in(&assignment.due_date, now, zone),
            due_relative: format_relative(&assignment.due_date, now),
            points_label: Self::points_label(&assignment),
            is_overdue: classification.is_overdue,
            due_proximity: classification.proximity,
            id: assignment.id,
            course_id: assignment.course_id,
            course_code: assignment.course_code,
            course_color: assignment.course_color,
            name: assignment.name,
            due_date: assignment.due_date,
            status: assignment.status,
            points: assignment.points,
            earned_points: assignment.earned_points,
        }
    }

    pub fn points_label(assignment: &Assignment) -> String {
        match assignment.earned_points {
            Some(earned) => format!("{}/{}", earned, assignment.points),
            None => format!("{} pts", assignment.points),
        }
    }
}

/// 作业列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListResponse {
    pub items: Vec<ClassifiedAssignment>,
    pub total: usize,
}
