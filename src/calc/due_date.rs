//! 截止日期分类
//!
//! 先把截止时间与当前时间都截断到本地日历日，再比较天数差。
//! 直接对原始时间戳做差再取整会把午夜附近的截止时间分错类。

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::zone::DayBoundary;

/// 距离截止日的远近
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum DueProximity {
    Overdue,
    Today,
    ThisWeek,
    Future,
}

impl DueProximity {
    /// 由日历天数差得到分类
    pub fn from_days(diff_days: i64) -> Self {
        match diff_days {
            d if d < 0 => DueProximity::Overdue,
            0 => DueProximity::Today,
            1..=7 => DueProximity::ThisWeek,
            _ => DueProximity::Future,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct DueClassification {
    pub is_overdue: bool,
    pub proximity: DueProximity,
}

/// 截止日与今天相差的日历天数（截止日在过去时为负）
pub fn days_until_in(
    due_date: &DateTime<Utc>,
    now: &DateTime<Utc>,
    zone: &impl DayBoundary,
) -> i64 {
    let due_day = zone.day_of(due_date);
    let today = zone.day_of(now);
    due_day.signed_duration_since(today).num_days()
}

pub fn classify_in(
    due_date: &DateTime<Utc>,
    now: &DateTime<Utc>,
    zone: &impl DayBoundary,
) -> DueClassification {
    let proximity = DueProximity::from_days(days_until_in(due_date, now, zone));
    DueClassification {
        is_overdue: proximity == DueProximity::Overdue,
        proximity,
    }
}

/// 使用服务器本地时区分类
pub fn classify(due_date: &DateTime<Utc>, now: &DateTime<Utc>) -> DueClassification {
    classify_in(due_date, now, &Local)
}

/// “Overdue” / “Today” / “Tomorrow” / “Friday, February 14”
pub fn format_due_date_in(
    due_date: &DateTime<Utc>,
    now: &DateTime<Utc>,
    zone: &impl DayBoundary,
) -> String {
    match days_until_in(due_date, now, zone) {
        d if d < 0 => "Overdue".to_string(),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => zone.day_of(due_date).format("%A, %B %-d").to_string(),
    }
}

pub fn format_due_date(due_date: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    format_due_date_in(due_date, now, &Local)
}
