use std::sync::Arc;

use chrono::Utc;

use crate::models::{
    announcements::entities::Announcement,
    assignments::entities::Assignment,
    courses::entities::{Course, CourseSettings},
    grading::{entities::Student, responses::GradingAssignmentInfo},
    users::entities::Enrollment,
};

use crate::errors::Result;

pub mod memory_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 课程管理方法
    // 列出课程
    async fn list_courses(&self) -> Result<Vec<Course>>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, course_id: &str) -> Result<Option<Course>>;
    // 获取课程设置
    async fn get_course_settings(&self, course_id: &str) -> Result<Option<CourseSettings>>;
    // 更新课程设置（同步更新课程卡片上的代码、名称、颜色与学期）
    async fn update_course_settings(
        &self,
        course_id: &str,
        settings: CourseSettings,
    ) -> Result<Option<CourseSettings>>;

    /// 作业管理方法
    // 列出作业，可按课程过滤
    async fn list_assignments(&self, course_id: Option<&str>) -> Result<Vec<Assignment>>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, assignment_id: &str) -> Result<Option<Assignment>>;
    // 获取评分界面所需的作业信息
    async fn get_grading_assignment(
        &self,
        assignment_id: &str,
    ) -> Result<Option<GradingAssignmentInfo>>;

    /// 评分方法
    // 列出作业的提交名单
    async fn list_submissions(&self, assignment_id: &str) -> Result<Vec<Student>>;
    // 保存一名学生的评分
    async fn save_grade(&self, assignment_id: &str, student: Student) -> Result<()>;

    /// 公告方法
    async fn list_announcements(&self, course_id: Option<&str>) -> Result<Vec<Announcement>>;

    /// 用户方法
    async fn count_users(&self) -> Result<u64>;
    async fn list_enrollments(&self, course_id: &str) -> Result<Vec<Enrollment>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = memory_storage::MemoryStorage::seeded(Utc::now())?;
    Ok(Arc::new(storage))
}
