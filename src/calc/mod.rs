//! 仪表盘纯计算逻辑
//!
//! 所有函数都是输入与“当前时间”的确定性函数，当前时间必须由调用方显式传入。
//!
//! - `zone`: 时间点到本地日历日的映射
//! - `due_date`: 截止日期分类与展示文本
//! - `relative`: “in 3 days / 2 hours ago” 相对时间文本
//! - `stats`: 仪表盘统计聚合
//! - `distribution`: 成绩分布与分数摘要
//! - `timeline`: 作业时间线节点

pub mod distribution;
pub mod due_date;
pub mod relative;
pub mod stats;
pub mod timeline;
pub mod zone;

pub use distribution::{GradeBucket, ScoreSummary, grade_distribution, score_summary};
pub use due_date::{
    DueClassification, DueProximity, classify, classify_in, days_until_in, format_due_date,
    format_due_date_in,
};
pub use relative::format_relative;
pub use stats::{
    DashboardStats, aggregate, aggregate_with, average_grade, filter_by_course, grade_percentage,
    round_1,
};
pub use timeline::{TimelineNode, TimelineStatus, timeline};
pub use zone::{DayBoundary, DayZone};
