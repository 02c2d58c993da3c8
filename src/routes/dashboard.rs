use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::dashboard::requests::StatsQuery;
use crate::services::DashboardService;

// 懒加载的全局 DASHBOARD_SERVICE 实例
static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

pub async fn get_stats(
    req: HttpRequest,
    query: web::Query<StatsQuery>,
) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.get_stats(&req, query.into_inner()).await
}

pub async fn get_analytics(
    req: HttpRequest,
    query: web::Query<StatsQuery>,
) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.get_analytics(&req, query.into_inner()).await
}

// 配置路由
pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/dashboard").route("/stats", web::get().to(get_stats)))
        .service(web::resource("/api/v1/analytics").route(web::get().to(get_analytics)));
}
