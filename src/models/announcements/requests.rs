use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnnouncementListQuery {
    pub course_id: Option<String>,
}
