use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct Announcement {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub content: String,
    // 发布者姓名
    pub posted_by: String,
    pub posted_at: chrono::DateTime<chrono::Utc>,
    pub is_pinned: bool,
}
