use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Utc};

use super::AnnouncementService;
use crate::calc::format_relative;
use crate::models::{
    ApiResponse, ErrorCode,
    announcements::{
        entities::Announcement,
        requests::AnnouncementListQuery,
        responses::{AnnouncementListResponse, AnnouncementResponse},
    },
};

/// 置顶优先，其余按发布时间倒序
pub(crate) fn order_announcements(
    mut announcements: Vec<Announcement>,
    now: &DateTime<Utc>,
) -> Vec<AnnouncementResponse> {
    announcements.sort_by(|a, b| {
        b.is_pinned
            .cmp(&a.is_pinned)
            .then_with(|| b.posted_at.cmp(&a.posted_at))
    });
    announcements
        .into_iter()
        .map(|a| {
            let posted_relative = format_relative(&a.posted_at, now);
            AnnouncementResponse::new(a, posted_relative)
        })
        .collect()
}

pub async fn list_announcements(
    service: &AnnouncementService,
    request: &HttpRequest,
    query: AnnouncementListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_announcements(query.course_id.as_deref()).await {
        Ok(announcements) => {
            let items = order_announcements(announcements, &Utc::now());
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AnnouncementListResponse {
                    total: items.len(),
                    items,
                },
                "Announcements retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StorageUnavailable,
                format!("Failed to list announcements: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory_storage::seed;
    use chrono::Duration;

    #[test]
    fn test_pinned_first_then_newest() {
        let now = Utc::now();
        let mut announcements = seed::build(now).announcements;
        announcements.reverse();
        announcements.push(Announcement {
            id: "a4".to_string(),
            course_id: "cs61a".to_string(),
            title: "Lab 2 Released".to_string(),
            content: "Lab 2 is available.".to_string(),
            posted_by: "TA Sarah Johnson".to_string(),
            posted_at: now - Duration::minutes(10),
            is_pinned: false,
        });

        let items = order_announcements(announcements, &now);
        let ids: Vec<&str> = items.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a4", "a2", "a3"]);
        assert_eq!(items[0].posted_by_initials, "PJ");
        assert_eq!(items[0].posted_relative, "about 2 hours ago");
        assert_eq!(items[1].posted_relative, "10 minutes ago");
        assert_eq!(items[2].posted_relative, "1 day ago");
    }
}
