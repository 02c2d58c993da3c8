use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};

/// 把时间点映射到某个时区下的日历日
pub trait DayBoundary {
    /// 截断到日（丢弃时分秒）
    fn day_of(&self, at: &DateTime<Utc>) -> NaiveDate;

    /// 按该时区格式化时间点
    fn format_at(&self, at: &DateTime<Utc>, pattern: &str) -> String;
}

impl DayBoundary for Utc {
    fn day_of(&self, at: &DateTime<Utc>) -> NaiveDate {
        at.date_naive()
    }

    fn format_at(&self, at: &DateTime<Utc>, pattern: &str) -> String {
        at.format(pattern).to_string()
    }
}

impl DayBoundary for FixedOffset {
    fn day_of(&self, at: &DateTime<Utc>) -> NaiveDate {
        at.with_timezone(self).date_naive()
    }

    fn format_at(&self, at: &DateTime<Utc>, pattern: &str) -> String {
        at.with_timezone(self).format(pattern).to_string()
    }
}

impl DayBoundary for Local {
    fn day_of(&self, at: &DateTime<Utc>) -> NaiveDate {
        at.with_timezone(self).date_naive()
    }

    fn format_at(&self, at: &DateTime<Utc>, pattern: &str) -> String {
        at.with_timezone(self).format(pattern).to_string()
    }
}

/// 服务端使用的时区：服务器本地时区或固定偏移
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayZone {
    Local,
    Fixed(FixedOffset),
}

impl DayBoundary for DayZone {
    fn day_of(&self, at: &DateTime<Utc>) -> NaiveDate {
        match self {
            DayZone::Local => Local.day_of(at),
            DayZone::Fixed(offset) => offset.day_of(at),
        }
    }

    fn format_at(&self, at: &DateTime<Utc>, pattern: &str) -> String {
        match self {
            DayZone::Local => Local.format_at(at, pattern),
            DayZone::Fixed(offset) => offset.format_at(at, pattern),
        }
    }
}
