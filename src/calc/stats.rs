//! 仪表盘统计聚合
//!
//! 聚合本身不做课程过滤，调用方先用 `filter_by_course` 过滤再传入。

use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::collections::HashSet;
use ts_rs::TS;

use super::due_date::days_until_in;
use super::zone::DayBoundary;
use crate::models::assignments::entities::Assignment;
use crate::models::courses::entities::GradeCalculation;

#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DashboardStats {
    // 未提交
    pub pending_count: usize,
    // 今天到七天内到期
    pub upcoming_count: usize,
    // 百分制平均分；没有可计算的已评分作业时为 None（区别于真实的 0%）
    pub average_grade: Option<f64>,
    pub graded_count: usize,
    pub total_count: usize,
    // 有未提交作业的课程数
    pub pending_courses: usize,
}

/// 单个作业的百分比得分
///
/// 未评分、缺少得分或满分不为正数的记录返回 None，保证聚合结果里不会出现 NaN/Infinity。
pub fn grade_percentage(assignment: &Assignment) -> Option<f64> {
    if !assignment.is_graded() || !assignment.points.is_finite() || assignment.points <= 0.0 {
        return None;
    }
    let earned = assignment.earned_points?;
    let percentage = earned / assignment.points * 100.0;
    percentage.is_finite().then_some(percentage)
}

/// 已评分作业的平均分
pub fn average_grade<'a, I>(assignments: I, method: GradeCalculation) -> Option<f64>
where
    I: IntoIterator<Item = &'a Assignment>,
{
    let mut accumulator = AverageAccumulator::default();
    for assignment in assignments {
        accumulator.push(assignment);
    }
    accumulator.finish(method)
}

#[derive(Debug, Default)]
struct AverageAccumulator {
    percentage_sum: f64,
    earned_sum: f64,
    points_sum: f64,
    count: usize,
}

impl AverageAccumulator {
    fn push(&mut self, assignment: &Assignment) {
        if let Some(percentage) = grade_percentage(assignment) {
            self.percentage_sum += percentage;
            self.earned_sum += assignment.earned_points.unwrap_or_default();
            self.points_sum += assignment.points;
            self.count += 1;
        }
    }

    fn finish(&self, method: GradeCalculation) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        match method {
            // 每个作业权重相同，不按满分加权
            GradeCalculation::Simple => Some(self.percentage_sum / self.count as f64),
            GradeCalculation::Weighted => Some(self.earned_sum / self.points_sum * 100.0),
        }
    }
}

pub fn aggregate_with<'a, I>(
    assignments: I,
    now: &DateTime<Utc>,
    zone: &impl DayBoundary,
    method: GradeCalculation,
) -> DashboardStats
where
    I: IntoIterator<Item = &'a Assignment>,
{
    let mut stats = DashboardStats::default();
    let mut pending_courses: HashSet<&str> = HashSet::new();
    let mut accumulator = AverageAccumulator::default();

    for assignment in assignments {
        stats.total_count += 1;

        if assignment.is_pending() {
            stats.pending_count += 1;
            pending_courses.insert(assignment.course_id.as_str());
        }

        let diff_days = days_until_in(&assignment.due_date, now, zone);
        if (0..=7).contains(&diff_days) {
            stats.upcoming_count += 1;
        }

        if assignment.is_graded() {
            stats.graded_count += 1;
        }
        accumulator.push(assignment);
    }

    stats.pending_courses = pending_courses.len();
    stats.average_grade = accumulator.finish(method);
    stats
}

/// 使用服务器本地时区与简单平均
pub fn aggregate(assignments: &[Assignment], now: &DateTime<Utc>) -> DashboardStats {
    aggregate_with(assignments, now, &Local, GradeCalculation::Simple)
}

pub fn filter_by_course<'a>(
    assignments: &'a [Assignment],
    course_id: &'a str,
) -> impl Iterator<Item = &'a Assignment> + 'a {
    assignments.iter().filter(move |a| a.course_id == course_id)
}

/// 保留一位小数
pub fn round_1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
