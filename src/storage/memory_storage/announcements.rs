//! 公告存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::announcements::entities::Announcement;

impl MemoryStorage {
    pub async fn list_announcements_impl(
        &self,
        course_id: Option<&str>,
    ) -> Result<Vec<Announcement>> {
        let state = self.state.read().await;
        Ok(state
            .announcements
            .iter()
            .filter(|a| course_id.is_none_or(|id| a.course_id == id))
            .cloned()
            .collect())
    }
}
