//! 内存存储实现
//!
//! 启动时由种子数据填充，数据在进程内共享，重启后恢复初始状态。

mod announcements;
mod assignments;
mod courses;
mod grading;
pub mod seed;
mod users;

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;

use crate::errors::{DashboardError, Result};
use crate::models::{
    announcements::entities::Announcement,
    assignments::entities::Assignment,
    courses::entities::{Course, CourseSettings},
    grading::{entities::Student, responses::GradingAssignmentInfo},
    users::entities::{Enrollment, User},
};

/// 存储中的全部数据
#[derive(Debug, Default)]
pub struct MemoryState {
    pub users: Vec<User>,
    pub enrollments: Vec<Enrollment>,
    pub courses: Vec<Course>,
    // 课程 ID -> 设置
    pub settings: HashMap<String, CourseSettings>,
    pub assignments: Vec<Assignment>,
    // 作业 ID -> 创建时间
    pub assignment_created: HashMap<String, DateTime<Utc>>,
    // 作业 ID -> 提交名单
    pub submissions: HashMap<String, Vec<Student>>,
    pub announcements: Vec<Announcement>,
}

impl MemoryState {
    /// 校验所有记录，任何一条不合法都拒绝加载
    pub fn validate(&self) -> Result<()> {
        for assignment in &self.assignments {
            assignment.validate()?;
        }
        for settings in self.settings.values() {
            settings.validate()?;
        }
        for (assignment_id, roster) in &self.submissions {
            let max_points = self
                .assignments
                .iter()
                .find(|a| &a.id == assignment_id)
                .map(|a| a.points)
                .unwrap_or(f64::INFINITY);
            for student in roster {
                student.validate(max_points)?;
            }
        }
        Ok(())
    }
}

pub struct MemoryStorage {
    pub(crate) state: RwLock<MemoryState>,
}

impl MemoryStorage {
    pub fn new(state: MemoryState) -> Result<Self> {
        state
            .validate()
            .map_err(|e| DashboardError::storage(format!("rejected initial state: {}", e.message())))?;
        Ok(Self {
            state: RwLock::new(state),
        })
    }

    /// 使用种子数据创建，日期相对于 `now`
    pub fn seeded(now: DateTime<Utc>) -> Result<Self> {
        let storage = Self::new(seed::build(now))?;
        info!("Memory storage seeded relative to {}", now.to_rfc3339());
        Ok(storage)
    }
}

// Storage trait 实现
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for MemoryStorage {
    // 课程模块
    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    async fn get_course_by_id(&self, course_id: &str) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn get_course_settings(&self, course_id: &str) -> Result<Option<CourseSettings>> {
        self.get_course_settings_impl(course_id).await
    }

    async fn update_course_settings(
        &self,
        course_id: &str,
        settings: CourseSettings,
    ) -> Result<Option<CourseSettings>> {
        self.update_course_settings_impl(course_id, settings).await
    }

    // 作业模块
    async fn list_assignments(&self, course_id: Option<&str>) -> Result<Vec<Assignment>> {
        self.list_assignments_impl(course_id).await
    }

    async fn get_assignment_by_id(&self, assignment_id: &str) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn get_grading_assignment(
        &self,
        assignment_id: &str,
    ) -> Result<Option<GradingAssignmentInfo>> {
        self.get_grading_assignment_impl(assignment_id).await
    }

    // 评分模块
    async fn list_submissions(&self, assignment_id: &str) -> Result<Vec<Student>> {
        self.list_submissions_impl(assignment_id).await
    }

    async fn save_grade(&self, assignment_id: &str, student: Student) -> Result<()> {
        self.save_grade_impl(assignment_id, student).await
    }

    // 公告模块
    async fn list_announcements(&self, course_id: Option<&str>) -> Result<Vec<Announcement>> {
        self.list_announcements_impl(course_id).await
    }

    // 用户模块
    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn list_enrollments(&self, course_id: &str) -> Result<Vec<Enrollment>> {
        self.list_enrollments_impl(course_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::SubmissionStatus;

    #[test]
    fn test_invalid_initial_state_rejected() {
        let mut state = seed::build(Utc::now());
        let assignment = state
            .assignments
            .iter_mut()
            .find(|a| a.status == SubmissionStatus::Graded)
            .unwrap();
        assignment.earned_points = None;

        let err = MemoryStorage::new(state).err().unwrap();
        assert_eq!(err.code(), "E001");
        assert!(err.message().starts_with("rejected initial state"));
    }
}
