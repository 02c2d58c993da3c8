use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;
use tracing::error;

use super::{CourseService, course_card};
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode, courses::responses::CourseListResponse};

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let zone = AppConfig::get().day_zone();
    let now = Utc::now();

    let (courses, assignments) = match (
        storage.list_courses().await,
        storage.list_assignments(None).await,
    ) {
        (Ok(courses), Ok(assignments)) => (courses, assignments),
        (Err(e), _) | (_, Err(e)) => {
            error!("Failed to list courses: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StorageUnavailable,
                    format!("Failed to list courses: {e}"),
                )),
            );
        }
    };

    let items: Vec<_> = courses
        .into_iter()
        .map(|course| course_card(course, &assignments, &now, &zone))
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CourseListResponse {
            total: items.len(),
            items,
        },
        "Courses retrieved successfully",
    )))
}
