use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GradingService;
use crate::errors::DashboardError;
use crate::models::{ApiResponse, ErrorCode};

pub async fn save_selected(
    service: &GradingService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let desk = service.get_desk(request);

    match desk.save_selected().await {
        Ok(student) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            student,
            "Grade saved successfully",
        ))),
        Err(DashboardError::Validation(msg)) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::GradingEditRejected, msg),
        )),
        Err(DashboardError::NotFound(msg)) => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::GradingStudentNotFound, msg),
        )),
        Err(e) => {
            error!("Failed to save grade: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StorageUnavailable,
                    format!("Failed to save grade: {e}"),
                )),
            )
        }
    }
}
