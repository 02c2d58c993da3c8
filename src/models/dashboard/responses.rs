use serde::Serialize;
use ts_rs::TS;

use crate::calc::{DashboardStats, GradeBucket, ScoreSummary};
use crate::models::courses::entities::GradeCalculation;

/// 统计卡片
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub subtext: String,
}

/// 仪表盘统计响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DashboardStatsResponse {
    pub course_id: Option<String>,
    pub grade_calculation: GradeCalculation,
    pub stats: DashboardStats,
    pub cards: Vec<StatCard>,
}

/// 分析页响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct AnalyticsResponse {
    pub stats: DashboardStats,
    pub cards: Vec<StatCard>,
    // 分布图所对应的作业名称
    pub distribution_title: String,
    pub distribution: Vec<GradeBucket>,
    pub summary: Option<ScoreSummary>,
}
