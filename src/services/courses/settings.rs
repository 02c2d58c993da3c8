use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::CourseService;
use crate::errors::DashboardError;
use crate::models::{ApiResponse, ErrorCode, courses::requests::UpdateCourseSettingsRequest};

pub async fn get_settings(
    service: &CourseService,
    request: &HttpRequest,
    course_id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_settings(course_id).await {
        Ok(Some(settings)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            settings,
            "Course settings retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StorageUnavailable,
                format!("Failed to get course settings: {e}"),
            )),
        ),
    }
}

pub async fn update_settings(
    service: &CourseService,
    request: &HttpRequest,
    course_id: &str,
    update: UpdateCourseSettingsRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 选课码只读，沿用原值
    let enrollment_code = match storage.get_course_settings(course_id).await {
        Ok(Some(current)) => current.enrollment_code,
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
                    format!("Failed to get course settings: {e}"),
                )),
            );
        }
    };

    let settings = update.into_settings(enrollment_code);
    if let Err(e) = settings.validate() {
        warn!("Rejected settings update for {}: {}", course_id, e);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CourseSettingsInvalid,
            e.message(),
        )));
    }

    match storage.update_course_settings(course_id, settings).await {
        Ok(Some(settings)) => {
            info!("Course settings updated for {}", course_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                settings,
                "Course settings updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(DashboardError::Validation(msg)) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::CourseSettingsInvalid, msg),
        )),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StorageUnavailable,
                format!("Failed to update course settings: {e}"),
            )),
        ),
    }
}
