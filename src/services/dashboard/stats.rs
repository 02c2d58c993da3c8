use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;
use tracing::error;

use super::{DashboardService, stat_cards};
use crate::calc::{aggregate_with, filter_by_course};
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, ErrorCode,
    dashboard::{requests::StatsQuery, responses::DashboardStatsResponse},
};

pub async fn get_stats(
    service: &DashboardService,
    request: &HttpRequest,
    query: StatsQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let zone = AppConfig::get().day_zone();
    let now = Utc::now();

    let grade_calculation = match service
        .grade_calculation(&storage, query.course_id.as_deref())
        .await
    {
        Ok(method) => method,
        Err(response) => return Ok(response),
    };

    let assignments = match storage.list_assignments(None).await {
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

    let stats = match &query.course_id {
        Some(course_id) => aggregate_with(
            filter_by_course(&assignments, course_id),
            &now,
            &zone,
            grade_calculation,
        ),
        None => aggregate_with(&assignments, &now, &zone, grade_calculation),
    };
    let cards = stat_cards(&stats, query.course_id.is_some());

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        DashboardStatsResponse {
            course_id: query.course_id,
            grade_calculation,
            stats,
            cards,
        },
        "Dashboard statistics retrieved successfully",
    )))
}
