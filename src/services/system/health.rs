use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use chrono::Utc;
use tracing::error;

use super::SystemService;
use crate::models::{ApiResponse, AppStartTime, ErrorCode, system::responses::HealthResponse};

pub async fn health(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let uptime_seconds = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| Utc::now().signed_duration_since(start.start_datetime).num_seconds())
        .unwrap_or_default();

    match storage.count_users().await {
        Ok(user_count) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            HealthResponse {
                success: true,
                system_name: config.app.system_name.clone(),
                user_count,
                uptime_seconds,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            "Storage connection successful",
        ))),
        Err(e) => {
            error!("Health check failed: {}", e);
            Ok(
                HttpResponse::ServiceUnavailable().json(ApiResponse::error_empty(
                    ErrorCode::StorageUnavailable,
                    format!("Storage connection failed: {e}"),
                )),
            )
        }
    }
}
