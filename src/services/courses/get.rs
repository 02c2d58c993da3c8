use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;

use super::{CourseService, course_card, course_detail};
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StorageUnavailable,
                    format!("Failed to get course information: {e}"),
                )),
            );
        }
    };

    let assignments = match storage.list_assignments(Some(course_id)).await {
        Ok(assignments) => assignments,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StorageUnavailable,
                    format!("Failed to list assignments: {e}"),
                )),
            );
        }
    };

    let enrollments = match storage.list_enrollments(course_id).await {
        Ok(enrollments) => enrollments,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StorageUnavailable,
                    format!("Failed to list enrollments: {e}"),
                )),
            );
        }
    };

    let card = course_card(course, &assignments, &Utc::now(), &AppConfig::get().day_zone());
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        course_detail(card, enrollments),
        "Course information retrieved successfully",
    )))
}
