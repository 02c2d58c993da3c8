use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{DashboardError, Result};
use crate::utils::validate::{
    validate_course_code, validate_course_name, validate_hex_color, validate_percentage,
    validate_year,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    pub id: String,
    pub code: String,
    pub name: String,
    // 学期标签，如 “Spring 2025”
    pub semester: String,
    pub color: String,
    pub student_count: u32,
    // 百分制成绩，None 表示尚未计算
    pub grade: Option<f64>,
}

/// 学期季节
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    /// 选课码中使用的两位缩写
    pub fn short_code(&self) -> &'static str {
        match self {
            Season::Spring => "SP",
            Season::Summer => "SU",
            Season::Fall => "FA",
            Season::Winter => "WI",
        }
    }

    /// 从 “Spring 2025” 这样的学期标签中解析
    pub fn parse_label(label: &str) -> Option<(Season, String)> {
        let mut parts = label.split_whitespace();
        let season = match parts.next()? {
            "Spring" => Season::Spring,
            "Summer" => Season::Summer,
            "Fall" => Season::Fall,
            "Winter" => Season::Winter,
            _ => return None,
        };
        let year = parts.next()?.to_string();
        if parts.next().is_some() {
            return None;
        }
        Some((season, year))
    }
}

/// 迟交策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub enum LatePolicy {
    // 接受迟交，不扣分
    Accept,
    // 按天扣分
    Deduct,
    // 不接受迟交
    #[serde(rename = "none")]
    Reject,
}

/// 课程成绩计算方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub enum GradeCalculation {
    // 各作业百分比的简单平均
    #[default]
    Simple,
    // 按满分加权
    Weighted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseSettings {
    pub course_code: String,
    pub course_name: String,
    pub semester: Season,
    pub year: String,
    pub color: String,
    // None 表示不限人数
    pub enrollment_limit: Option<u32>,
    pub allow_self_enrollment: bool,
    pub late_policy: LatePolicy,
    // 每天扣除的百分比，仅在 Deduct 策略下生效
    pub late_penalty: f64,
    pub grade_calculation: GradeCalculation,
    pub show_grades: bool,
    pub hide_student_names: bool,
    pub enrollment_code: String,
}

impl CourseSettings {
    pub fn validate(&self) -> Result<()> {
        validate_course_code(&self.course_code).map_err(DashboardError::validation)?;
        validate_course_name(&self.course_name).map_err(DashboardError::validation)?;
        validate_year(&self.year).map_err(DashboardError::validation)?;
        validate_hex_color(&self.color).map_err(DashboardError::validation)?;
        validate_percentage(self.late_penalty)
            .map_err(|_| DashboardError::validation("Late penalty must be between 0 and 100"))?;
        if self.enrollment_limit == Some(0) {
            return Err(DashboardError::validation(
                "Enrollment limit must be at least 1 (leave empty for unlimited)",
            ));
        }
        Ok(())
    }

    /// 学期标签，如 “Spring 2025”
    pub fn semester_label(&self) -> String {
        format!("{} {}", self.semester.as_str(), self.year)
    }
}
