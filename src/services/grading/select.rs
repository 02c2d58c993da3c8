use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradingService;
use super::view::session_view;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode, grading::requests::SelectStudentRequest};

pub enum Step {
    Next,
    Previous,
}

pub async fn select_student(
    service: &GradingService,
    request: &HttpRequest,
    select: SelectStudentRequest,
) -> ActixResult<HttpResponse> {
    let desk = service.get_desk(request);

    if let Err(e) = desk.select(select.index).await {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradingStudentNotFound,
            e.message(),
        )));
    }

    let session = desk.read().await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        session_view(&session, &AppConfig::get().day_zone()),
        "Student selected",
    )))
}

/// 上一个/下一个学生，到达两端时保持不动
pub async fn step(
    service: &GradingService,
    request: &HttpRequest,
    step: Step,
) -> ActixResult<HttpResponse> {
    let desk = service.get_desk(request);
    match step {
        Step::Next => desk.next().await,
        Step::Previous => desk.previous().await,
    }

    let session = desk.read().await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        session_view(&session, &AppConfig::get().day_zone()),
        "Student selected",
    )))
}
