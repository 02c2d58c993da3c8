use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub enum TimelineStatus {
    Completed,
    Current,
    Future,
}

/// 作业时间线节点
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct TimelineNode {
    pub label: String,
    pub at: Option<DateTime<Utc>>,
    pub status: TimelineStatus,
}

/// 创建 → 提交 → 评分
pub fn timeline(
    created: DateTime<Utc>,
    submitted: Option<DateTime<Utc>>,
    graded: Option<DateTime<Utc>>,
) -> [TimelineNode; 3] {
    let submitted_status = match (submitted, graded) {
        (Some(_), Some(_)) => TimelineStatus::Completed,
        (Some(_), None) => TimelineStatus::Current,
        (None, _) => TimelineStatus::Future,
    };
    let graded_status = match (graded, submitted) {
        (Some(_), _) => TimelineStatus::Completed,
        (None, Some(_)) => TimelineStatus::Current,
        (None, None) => TimelineStatus::Future,
    };

    [
        TimelineNode {
            label: "Assignment created".to_string(),
            at: Some(created),
            status: TimelineStatus::Completed,
        },
        TimelineNode {
            label: if submitted.is_some() {
                "Submitted by student"
            } else {
                "Awaiting submission"
            }
            .to_string(),
            at: submitted,
            status: submitted_status,
        },
        TimelineNode {
            label: if graded.is_some() {
                "Graded by instructor"
            } else {
                "Awaiting grading"
            }
            .to_string(),
            at: graded,
            status: graded_status,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 31, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_nothing_submitted() {
        let nodes = timeline(created(), None, None);
        assert_eq!(nodes[0].status, TimelineStatus::Completed);
        assert_eq!(nodes[1].status, TimelineStatus::Future);
        assert_eq!(nodes[1].label, "Awaiting submission");
        assert_eq!(nodes[2].status, TimelineStatus::Future);
        assert_eq!(nodes[2].label, "Awaiting grading");
    }

    #[test]
    fn test_submitted_awaiting_grading() {
        let submitted = created() + Duration::days(3);
        let nodes = timeline(created(), Some(submitted), None);
        assert_eq!(nodes[1].status, TimelineStatus::Current);
        assert_eq!(nodes[1].at, Some(submitted));
        assert_eq!(nodes[2].status, TimelineStatus::Current);
    }

    #[test]
    fn test_fully_graded() {
        let submitted = created() + Duration::days(3);
        let graded = created() + Duration::days(5);
        let nodes = timeline(created(), Some(submitted), Some(graded));
        assert!(nodes.iter().all(|n| n.status == TimelineStatus::Completed));
        assert_eq!(nodes[2].label, "Graded by instructor");
    }
}
