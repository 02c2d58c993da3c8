use serde::Serialize;
use ts_rs::TS;

/// 存储连通性检查
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct HealthResponse {
    pub success: bool,
    pub system_name: String,
    pub user_count: u64,
    pub uptime_seconds: i64,
    pub version: String,
}
