use actix_web::web;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::grading::GradingDesk;
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub desk: web::Data<GradingDesk>,
}

/// 打印种子数据概况
async fn log_seed_summary(storage: &Arc<dyn Storage>) {
    match (storage.list_courses().await, storage.count_users().await) {
        (Ok(courses), Ok(users)) => {
            info!("Loaded {} course(s) and {} user(s)", courses.len(), users);
        }
        (Err(e), _) | (_, Err(e)) => {
            warn!("Failed to summarize storage contents: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储与评分界面
pub async fn prepare_server_startup() -> StartupContext {
    let config = AppConfig::get();

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized");

    log_seed_summary(&storage).await;

    let desk = GradingDesk::open(
        storage.clone(),
        &config.grading.assignment_id,
        config.autosave_idle(),
    )
    .await
    .expect("Failed to open grading desk");
    debug!(
        "Grading desk ready, autosave after {} ms of inactivity",
        config.grading.autosave_idle_ms
    );

    StartupContext {
        storage,
        desk: web::Data::new(desk),
    }
}
