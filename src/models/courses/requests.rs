use serde::Deserialize;

use crate::models::courses::entities::{CourseSettings, GradeCalculation, LatePolicy, Season};

/// 更新课程设置请求（选课码只读，不可修改）
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCourseSettingsRequest {
    pub course_code: String,
    pub course_name: String,
    pub semester: Season,
    pub year: String,
    pub color: String,
    pub enrollment_limit: Option<u32>,
    pub allow_self_enrollment: bool,
    pub late_policy: LatePolicy,
    #[serde(default)]
    pub late_penalty: f64,
    pub grade_calculation: GradeCalculation,
    pub show_grades: bool,
    pub hide_student_names: bool,
}

impl UpdateCourseSettingsRequest {
    pub fn into_settings(self, enrollment_code: String) -> CourseSettings {
        CourseSettings {
            course_code: self.course_code.trim().to_string(),
            course_name: self.course_name.trim().to_string(),
            semester: self.semester,
            year: self.year,
            color: self.color,
            enrollment_limit: self.enrollment_limit,
            allow_self_enrollment: self.allow_self_enrollment,
            late_policy: self.late_policy,
            late_penalty: self.late_penalty,
            grade_calculation: self.grade_calculation,
            show_grades: self.show_grades,
            hide_student_names: self.hide_student_names,
            enrollment_code,
        }
    }
}
