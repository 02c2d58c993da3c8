use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;
use tracing::{debug, error};

use super::{DashboardService, stat_cards};
use crate::calc::{aggregate_with, filter_by_course, grade_distribution, round_1, score_summary};
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, ErrorCode,
    assignments::entities::Assignment,
    dashboard::{requests::StatsQuery, responses::AnalyticsResponse},
    grading::entities::Student,
};

/// 名单中已评分学生的百分比得分
pub(crate) fn roster_percentages(roster: &[Student], points: f64) -> Vec<f64> {
    if !points.is_finite() || points <= 0.0 {
        return Vec::new();
    }
    roster
        .iter()
        .filter_map(|s| s.earned_points)
        .map(|earned| round_1(earned / points * 100.0))
        .collect()
}

pub async fn get_analytics(
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

    let all = match storage.list_assignments(None).await {
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
    let scoped: Vec<&Assignment> = match &query.course_id {
        Some(course_id) => filter_by_course(&all, course_id).collect(),
        None => all.iter().collect(),
    };

    let stats = aggregate_with(scoped.iter().copied(), &now, &zone, grade_calculation);
    let cards = stat_cards(&stats, query.course_id.is_some());

    // 汇总范围内所有作业的提交名单
    let mut percentages = Vec::new();
    let mut contributing: Vec<&str> = Vec::new();
    for assignment in &scoped {
        let roster = match storage.list_submissions(&assignment.id).await {
            Ok(roster) => roster,
            Err(e) => {
                error!("Failed to list submissions for {}: {}", assignment.id, e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::StorageUnavailable,
                        format!("Failed to list submissions: {e}"),
                    )),
                );
            }
        };
        let scores = roster_percentages(&roster, assignment.points);
        if !scores.is_empty() {
            contributing.push(assignment.name.as_str());
            percentages.extend(scores);
        }
    }
    debug!(
        "Analytics over {} graded submissions from {} assignment(s)",
        percentages.len(),
        contributing.len()
    );

    let distribution_title = match contributing.as_slice() {
        [single] => single.to_string(),
        _ => "All graded submissions".to_string(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AnalyticsResponse {
            stats,
            cards,
            distribution_title,
            distribution: grade_distribution(&percentages),
            summary: score_summary(&percentages),
        },
        "Analytics retrieved successfully",
    )))
}
