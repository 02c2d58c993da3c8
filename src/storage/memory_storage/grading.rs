//! 评分存储操作

use super::MemoryStorage;
use crate::errors::{DashboardError, Result};
use crate::models::grading::entities::Student;

impl MemoryStorage {
    pub async fn list_submissions_impl(&self, assignment_id: &str) -> Result<Vec<Student>> {
        let state = self.state.read().await;
        Ok(state
            .submissions
            .get(assignment_id)
            .cloned()
            .unwrap_or_default())
    }

    /// 覆盖名单中同 ID 学生的记录
    pub async fn save_grade_impl(&self, assignment_id: &str, student: Student) -> Result<()> {
        let mut state = self.state.write().await;
        let max_points = state
            .assignments
            .iter()
            .find(|a| a.id == assignment_id)
            .map(|a| a.points)
            .ok_or_else(|| DashboardError::not_found(format!("assignment {assignment_id}")))?;
        student.validate(max_points)?;

        let slot = state
            .submissions
            .get_mut(assignment_id)
            .and_then(|roster| roster.iter_mut().find(|s| s.id == student.id))
            .ok_or_else(|| {
                DashboardError::not_found(format!(
                    "student {} in assignment {assignment_id}",
                    student.id
                ))
            })?;
        *slot = student;
        Ok(())
    }
}
