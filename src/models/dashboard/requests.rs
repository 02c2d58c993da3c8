use serde::Deserialize;

/// 仪表盘/分析页查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsQuery {
    // 按课程过滤
    pub course_id: Option<String>,
}
