use tokio::signal;
use tracing::warn;

use crate::grading::GradingDesk;

pub async fn listen_for_shutdown() {
    // 等待 Ctrl+C 信号
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        return std::future::pending().await;
    }
    warn!("Shutdown signal received, initiating graceful shutdown...");
}

/// 关闭评分界面，取消尚未触发的自动保存
pub fn close_grading_desk(desk: &GradingDesk) {
    desk.shutdown();
    warn!("Grading desk closed");
}
