use serde::Serialize;
use ts_rs::TS;

use super::stats::round_1;

/// 成绩分布中的一个字母等级区间
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct GradeBucket {
    pub grade: String,
    pub range: String,
    pub count: i64,
    // 图表颜色
    pub fill: String,
}

/// 分数摘要（百分制，保留一位小数）
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct ScoreSummary {
    pub average: f64,
    pub median: f64,
    pub std_dev: f64,
    pub max: f64,
    pub min: f64,
    pub count: usize,
}

// (等级, 区间, 下限, 颜色)，按图表从左到右的顺序
const BUCKETS: [(&str, &str, f64, &str); 5] = [
    ("F", "0-59", 0.0, "#EF4444"),
    ("D", "60-69", 60.0, "#F97316"),
    ("C", "70-79", 70.0, "#EAB308"),
    ("B", "80-89", 80.0, "#3B82F6"),
    ("A", "90-100", 90.0, "#10B981"),
];

/// 计算成绩分布
///
/// 输入为百分比分数；非有限值被忽略，超出 [0, 100] 的值归入两端区间。
pub fn grade_distribution(percentages: &[f64]) -> Vec<GradeBucket> {
    let mut counts = [0i64; BUCKETS.len()];

    for &percentage in percentages.iter().filter(|p| p.is_finite()) {
        let index = BUCKETS
            .iter()
            .rposition(|(_, _, floor, _)| percentage >= *floor)
            .unwrap_or(0);
        counts[index] += 1;
    }

    BUCKETS
        .iter()
        .zip(counts)
        .map(|((grade, range, _, fill), count)| GradeBucket {
            grade: grade.to_string(),
            range: range.to_string(),
            count,
            fill: fill.to_string(),
        })
        .collect()
}

/// 平均数、中位数、总体标准差、最高分、最低分
pub fn score_summary(percentages: &[f64]) -> Option<ScoreSummary> {
    let mut scores: Vec<f64> = percentages.iter().copied().filter(|p| p.is_finite()).collect();
    if scores.is_empty() {
        return None;
    }
    scores.sort_by(f64::total_cmp);

    let count = scores.len();
    let average = scores.iter().sum::<f64>() / count as f64;
    let median = if count % 2 == 1 {
        scores[count / 2]
    } else {
        (scores[count / 2 - 1] + scores[count / 2]) / 2.0
    };
    let variance = scores.iter().map(|s| (s - average).powi(2)).sum::<f64>() / count as f64;

    Some(ScoreSummary {
        average: round_1(average),
        median: round_1(median),
        std_dev: round_1(variance.sqrt()),
        max: round_1(scores[count - 1]),
        min: round_1(scores[0]),
        count,
    })
}
