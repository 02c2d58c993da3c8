use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{DashboardError, Result};
use crate::utils::validate::{validate_earned_points, validate_points_possible};

/// 提交状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum SubmissionStatus {
    NotSubmitted,
    Submitted,
    Graded,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::NotSubmitted => "not-submitted",
            SubmissionStatus::Submitted => "submitted",
            SubmissionStatus::Graded => "graded",
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    // 唯一 ID
    pub id: String,
    // 所属课程
    pub course_id: String,
    pub course_code: String,
    pub course_color: String,
    // 作业名称
    pub name: String,
    // 截止时间
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub status: SubmissionStatus,
    // 满分
    pub points: f64,
    // 得分，仅在已评分时存在
    pub earned_points: Option<f64>,
}

impl Assignment {
    /// 构造时校验分数与状态的一致性
    pub fn validate(&self) -> Result<()> {
        validate_points_possible(self.points)
            .map_err(|e| DashboardError::validation(format!("assignment {}: {e}", self.id)))?;

        match (self.status, self.earned_points) {
            (SubmissionStatus::Graded, Some(earned)) => {
                validate_earned_points(earned, self.points).map_err(|e| {
                    DashboardError::validation(format!("assignment {}: {e}", self.id))
                })?;
            }
            (SubmissionStatus::Graded, None) => {
                return Err(DashboardError::validation(format!(
                    "assignment {}: graded assignment requires earned points",
                    self.id
                )));
            }
            (status, Some(_)) => {
                return Err(DashboardError::validation(format!(
                    "assignment {}: earned points present while status is {status}",
                    self.id
                )));
            }
            (_, None) => {}
        }

        Ok(())
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::NotSubmitted
    }

    pub fn is_graded(&self) -> bool {
        self.status == SubmissionStatus::Graded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn assignment(status: SubmissionStatus, points: f64, earned: Option<f64>) -> Assignment {
        Assignment {
            id: "cs-prog4".to_string(),
            course_id: "cs150".to_string(),
            course_code: "CS 150".to_string(),
            course_color: "#8B5CF6".to_string(),
            name: "Programming Assignment 4".to_string(),
            due_date: chrono::Utc.with_ymd_and_hms(2025, 2, 11, 23, 59, 0).unwrap(),
            status,
            points,
            earned_points: earned,
        }
    }

    #[test]
    fn test_valid_assignments() {
        assert!(assignment(SubmissionStatus::NotSubmitted, 150.0, None).validate().is_ok());
        assert!(assignment(SubmissionStatus::Submitted, 150.0, None).validate().is_ok());
        assert!(assignment(SubmissionStatus::Graded, 150.0, Some(150.0)).validate().is_ok());
        // 满分为 0 的记录允许构造，聚合时会被排除
        assert!(assignment(SubmissionStatus::Graded, 0.0, Some(0.0)).validate().is_ok());
    }

    #[test]
    fn test_negative_points_rejected() {
        let err = assignment(SubmissionStatus::NotSubmitted, -5.0, None)
            .validate()
            .unwrap_err();
        assert_eq!(err.code(), "E002");
        assert!(err.message().contains("must not be negative"));
    }

    #[test]
    fn test_earned_above_points_rejected() {
        let err = assignment(SubmissionStatus::Graded, 100.0, Some(101.0))
            .validate()
            .unwrap_err();
        assert!(err.message().contains("must not exceed"));
    }

    #[test]
    fn test_earned_without_graded_status_rejected() {
        let err = assignment(SubmissionStatus::Submitted, 100.0, Some(80.0))
            .validate()
            .unwrap_err();
        assert!(err.message().contains("status is submitted"));
    }

    #[test]
    fn test_graded_without_earned_rejected() {
        assert!(assignment(SubmissionStatus::Graded, 100.0, None).validate().is_err());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&SubmissionStatus::NotSubmitted).unwrap();
        assert_eq!(json, "\"not-submitted\"");
        let parsed: SubmissionStatus = serde_json::from_str("\"graded\"").unwrap();
        assert_eq!(parsed, SubmissionStatus::Graded);
    }
}
