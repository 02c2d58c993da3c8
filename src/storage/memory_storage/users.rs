//! 用户存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::users::entities::Enrollment;

impl MemoryStorage {
    pub async fn count_users_impl(&self) -> Result<u64> {
        Ok(self.state.read().await.users.len() as u64)
    }

    pub async fn list_enrollments_impl(&self, course_id: &str) -> Result<Vec<Enrollment>> {
        let state = self.state.read().await;
        Ok(state
            .enrollments
            .iter()
            .filter(|e| e.course_id == course_id)
            .cloned()
            .collect())
    }
}
