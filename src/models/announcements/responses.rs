use serde::Serialize;
use ts_rs::TS;

use crate::models::announcements::entities::Announcement;
use crate::models::users::entities::initials;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct AnnouncementResponse {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub content: String,
    pub posted_by: String,
    pub posted_by_initials: String,
    pub posted_at: chrono::DateTime<chrono::Utc>,
    // “2 hours ago” 等
    pub posted_relative: String,
    pub is_pinned: bool,
}

impl AnnouncementResponse {
    pub fn new(announcement: Announcement, posted_relative: String) -> Self {
        Self {
            posted_by_initials: initials(&announcement.posted_by),
            id: announcement.id,
            course_id: announcement.course_id,
            title: announcement.title,
            content: announcement.content,
            posted_by: announcement.posted_by,
            posted_at: announcement.posted_at,
            posted_relative,
            is_pinned: announcement.is_pinned,
        }
    }
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct AnnouncementListResponse {
    pub items: Vec<AnnouncementResponse>,
    pub total: usize,
}
