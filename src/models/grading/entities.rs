use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{DashboardError, Result};
use crate::models::assignments::entities::SubmissionStatus;

/// 评分名单中的一名学生及其提交
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub submission_status: SubmissionStatus,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    // 提交的文件名
    pub file: Option<String>,
    pub earned_points: Option<f64>,
    pub feedback: Option<String>,
    #[serde(default)]
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Student {
    /// 没有提交文件的学生不能被评分
    pub fn can_be_graded(&self) -> bool {
        self.file.is_some()
    }

    pub fn validate(&self, max_points: f64) -> Result<()> {
        if !self.can_be_graded() {
            if self.submission_status != SubmissionStatus::NotSubmitted {
                return Err(DashboardError::validation(format!(
                    "student {}: status {} requires a submitted file",
                    self.id, self.submission_status
                )));
            }
            if self.earned_points.is_some() || self.feedback.is_some() {
                return Err(DashboardError::validation(format!(
                    "student {}: a submission without a file cannot be graded",
                    self.id
                )));
            }
        }

        match (self.submission_status, self.earned_points) {
            (SubmissionStatus::Graded, None) => {
                return Err(DashboardError::validation(format!(
                    "student {}: graded submission requires earned points",
                    self.id
                )));
            }
            (SubmissionStatus::Graded, Some(earned)) => {
                if !earned.is_finite() || earned < 0.0 || earned > max_points {
                    return Err(DashboardError::validation(format!(
                        "student {}: earned points must be between 0 and {max_points}",
                        self.id
                    )));
                }
            }
            (status, Some(_)) => {
                return Err(DashboardError::validation(format!(
                    "student {}: earned points present while status is {status}",
                    self.id
                )));
            }
            (_, None) => {}
        }

        Ok(())
    }

    /// 提交时间晚于截止时间即为迟交
    pub fn is_late(&self, due_date: &chrono::DateTime<chrono::Utc>) -> bool {
        self.submitted_at.is_some_and(|at| at > *due_date)
    }
}

/// 评分草稿中的可编辑字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub enum GradingField {
    Points,
    Feedback,
}

impl GradingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            GradingField::Points => "points",
            GradingField::Feedback => "feedback",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(status: SubmissionStatus, file: Option<&str>, earned: Option<f64>) -> Student {
        Student {
            id: "s1".to_string(),
            name: "Alice Chen".to_string(),
            submission_status: status,
            submitted_at: None,
            file: file.map(str::to_string),
            earned_points: earned,
            feedback: None,
            graded_at: None,
        }
    }

    #[test]
    fn test_valid_roster_entries() {
        assert!(student(SubmissionStatus::NotSubmitted, None, None).validate(100.0).is_ok());
        assert!(
            student(SubmissionStatus::Submitted, Some("hw1.pdf"), None)
                .validate(100.0)
                .is_ok()
        );
        assert!(
            student(SubmissionStatus::Graded, Some("hw1.pdf"), Some(95.0))
                .validate(100.0)
                .is_ok()
        );
    }

    #[test]
    fn test_grade_without_file_rejected() {
        let err = student(SubmissionStatus::Graded, None, Some(95.0))
            .validate(100.0)
            .unwrap_err();
        assert!(err.message().contains("requires a submitted file"));

        let err = student(SubmissionStatus::NotSubmitted, None, Some(95.0))
            .validate(100.0)
            .unwrap_err();
        assert!(err.message().contains("cannot be graded"));
    }

    #[test]
    fn test_points_out_of_range_rejected() {
        assert!(
            student(SubmissionStatus::Graded, Some("hw1.pdf"), Some(101.0))
                .validate(100.0)
                .is_err()
        );
        assert!(
            student(SubmissionStatus::Submitted, Some("hw1.pdf"), Some(80.0))
                .validate(100.0)
                .is_err()
        );
    }

    #[test]
    fn test_is_late() {
        use chrono::TimeZone;
        let due = chrono::Utc.with_ymd_and_hms(2025, 2, 10, 23, 59, 0).unwrap();
        let mut s = student(SubmissionStatus::Submitted, Some("hw1.pdf"), None);
        assert!(!s.is_late(&due));
        s.submitted_at = Some(due - chrono::Duration::hours(1));
        assert!(!s.is_late(&due));
        s.submitted_at = Some(due + chrono::Duration::minutes(1));
        assert!(s.is_late(&due));
    }
}
