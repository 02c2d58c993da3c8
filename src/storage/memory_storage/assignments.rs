//! 作业存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::{
    assignments::entities::Assignment, grading::responses::GradingAssignmentInfo,
};

impl MemoryStorage {
    pub async fn list_assignments_impl(&self, course_id: Option<&str>) -> Result<Vec<Assignment>> {
        let state = self.state.read().await;
        Ok(state
            .assignments
            .iter()
            .filter(|a| course_id.is_none_or(|id| a.course_id == id))
            .cloned()
            .collect())
    }

    pub async fn get_assignment_by_id_impl(
        &self,
        assignment_id: &str,
    ) -> Result<Option<Assignment>> {
        let state = self.state.read().await;
        Ok(state.assignments.iter().find(|a| a.id == assignment_id).cloned())
    }

    pub async fn get_grading_assignment_impl(
        &self,
        assignment_id: &str,
    ) -> Result<Option<GradingAssignmentInfo>> {
        let state = self.state.read().await;
        let Some(assignment) = state.assignments.iter().find(|a| a.id == assignment_id) else {
            return Ok(None);
        };
        // 没有记录创建时间的作业视为在截止前两周创建
        let created_at = state
            .assignment_created
            .get(assignment_id)
            .copied()
            .unwrap_or(assignment.due_date - chrono::Duration::days(14));

        Ok(Some(GradingAssignmentInfo {
            id: assignment.id.clone(),
            name: assignment.name.clone(),
            course_code: assignment.course_code.clone(),
            points: assignment.points,
            due_date: assignment.due_date,
            created_at,
        }))
    }
}
