use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Utc};
use tracing::error;

use super::AssignmentService;
use crate::calc::DayBoundary;
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, ErrorCode,
    assignments::{
        entities::Assignment,
        requests::AssignmentListQuery,
        responses::{AssignmentListResponse, ClassifiedAssignment},
    },
};

/// 分类、过滤并按截止时间排序
pub(crate) fn classify_all(
    assignments: Vec<Assignment>,
    query: &AssignmentListQuery,
    now: &DateTime<Utc>,
    zone: &impl DayBoundary,
) -> Vec<ClassifiedAssignment> {
    let mut items: Vec<ClassifiedAssignment> = assignments
        .into_iter()
        .filter(|a| query.status.is_none_or(|status| a.status == status))
        .map(|a| ClassifiedAssignment::classify(a, now, zone))
        .filter(|a| query.proximity.is_none_or(|p| a.due_proximity == p))
        .collect();
    items.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.id.cmp(&b.id)));
    items
}

pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    query: AssignmentListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(course_id) = &query.course_id {
        match storage.get_course_by_id(course_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::CourseNotFound,
                    "Course not found",
                )));
            }
            Err(e) => {
                error!("Failed to get course {}: {}", course_id, e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::StorageUnavailable,
                        format!("Failed to get course information: {e}"),
                    )),
                );
            }
        }
    }

    let assignments = match storage.list_assignments(query.course_id.as_deref()).await {
        Ok(assignments) => assignments,
        Err(e) => {
            error!("Failed to list assignments: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StorageUnavailable,
                    format!("Failed to list assignments: {e}"),
                )),
            );
        }
    };

    let items = classify_all(assignments, &query, &Utc::now(), &AppConfig::get().day_zone());
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AssignmentListResponse {
            total: items.len(),
            items,
        },
        "Assignments retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::DueProximity;
    use crate::models::assignments::entities::SubmissionStatus;
    use crate::storage::memory_storage::seed;

    #[test]
    fn test_sorted_by_due_date() {
        let now = Utc::now();
        let items = classify_all(seed::build(now).assignments, &AssignmentListQuery::default(), &now, &Utc);
        assert_eq!(items.len(), 18);
        assert!(items.windows(2).all(|w| w[0].due_date <= w[1].due_date));
        assert_eq!(items[0].id, "cs-prog3");
    }

    #[test]
    fn test_filter_by_proximity_and_status() {
        let now = Utc::now();
        let query = AssignmentListQuery {
            course_id: None,
            proximity: Some(DueProximity::Overdue),
            status: Some(SubmissionStatus::NotSubmitted),
        };
        let items = classify_all(seed::build(now).assignments, &query, &now, &Utc);
        let ids: Vec<&str> = items.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["eng-essay-draft"]);
        assert!(items[0].is_overdue);
    }
}
