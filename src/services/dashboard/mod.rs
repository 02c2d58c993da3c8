pub mod analytics;
pub mod stats;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::error;

use crate::calc::DashboardStats;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::entities::GradeCalculation,
    dashboard::{requests::StatsQuery, responses::StatCard},
};
use crate::storage::Storage;

pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 课程视图使用该课程设置中的计算方式，全局视图使用默认方式
    ///
    /// 课程不存在或存储失败时返回可直接响应的错误
    pub(crate) async fn grade_calculation(
        &self,
        storage: &Arc<dyn Storage>,
        course_id: Option<&str>,
    ) -> Result<GradeCalculation, HttpResponse> {
        let Some(course_id) = course_id else {
            return Ok(GradeCalculation::default());
        };
        match storage.get_course_settings(course_id).await {
            Ok(Some(settings)) => Ok(settings.grade_calculation),
            Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            ))),
            Err(e) => {
                error!("Failed to load course settings: {}", e);
                Err(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::StorageUnavailable,
                        format!("Failed to load course settings: {e}"),
                    )),
                )
            }
        }
    }

    // 仪表盘统计卡片
    pub async fn get_stats(
        &self,
        request: &HttpRequest,
        query: StatsQuery,
    ) -> ActixResult<HttpResponse> {
        stats::get_stats(self, request, query).await
    }

    // 分析页：统计 + 成绩分布
    pub async fn get_analytics(
        &self,
        request: &HttpRequest,
        query: StatsQuery,
    ) -> ActixResult<HttpResponse> {
        analytics::get_analytics(self, request, query).await
    }
}

/// 四张统计卡片
pub(crate) fn stat_cards(stats: &DashboardStats, scoped_to_course: bool) -> Vec<StatCard> {
    let scope = if scoped_to_course {
        "In this course".to_string()
    } else {
        "Across all courses".to_string()
    };
    let pending_subtext = if scoped_to_course {
        scope.clone()
    } else if stats.pending_courses == 1 {
        "Across 1 course".to_string()
    } else {
        format!("Across {} courses", stats.pending_courses)
    };

    vec![
        StatCard {
            label: "Pending Submissions".to_string(),
            value: stats.pending_count.to_string(),
            subtext: pending_subtext,
        },
        StatCard {
            label: "Upcoming Deadlines".to_string(),
            value: stats.upcoming_count.to_string(),
            subtext: "Next 7 days".to_string(),
        },
        StatCard {
            label: "Current Average".to_string(),
            // 没有已评分作业时显示 N/A，而不是 0%
            value: stats
                .average_grade
                .map(|avg| format!("{avg:.1}%"))
                .unwrap_or_else(|| "N/A".to_string()),
            subtext: scope.clone(),
        },
        StatCard {
            label: "Assignments Graded".to_string(),
            value: format!("{}/{}", stats.graded_count, stats.total_count),
            subtext: scope,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory_storage::MemoryStorage;
    use actix_web::http::StatusCode;
    use chrono::Utc;

    #[test]
    fn test_cards_for_empty_stats() {
        let cards = stat_cards(&DashboardStats::default(), false);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "0");
        assert_eq!(cards[0].subtext, "Across 0 courses");
        assert_eq!(cards[2].value, "N/A");
        assert_eq!(cards[3].value, "0/0");
    }

    #[test]
    fn test_cards_values() {
        let stats = DashboardStats {
            pending_count: 6,
            upcoming_count: 4,
            average_grade: Some(87.456),
            graded_count: 12,
            total_count: 15,
            pending_courses: 3,
        };
        let cards = stat_cards(&stats, false);
        assert_eq!(cards[0].subtext, "Across 3 courses");
        assert_eq!(cards[1].value, "4");
        assert_eq!(cards[2].value, "87.5%");
        assert_eq!(cards[3].value, "12/15");

        let cards = stat_cards(&stats, true);
        assert_eq!(cards[0].subtext, "In this course");
    }

    #[tokio::test]
    async fn test_grade_calculation_lookup() {
        let service = DashboardService::new_lazy();
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::seeded(Utc::now()).unwrap());

        assert_eq!(
            service.grade_calculation(&storage, None).await.unwrap(),
            GradeCalculation::Simple
        );
        assert_eq!(
            service.grade_calculation(&storage, Some("cs61a")).await.unwrap(),
            GradeCalculation::Simple
        );

        let missing = service
            .grade_calculation(&storage, Some("missing"))
            .await
            .unwrap_err();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
