use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::errors::{DashboardError, Result};
use crate::models::assignments::entities::SubmissionStatus;
use crate::models::grading::entities::{GradingField, Student};
use crate::models::grading::responses::GradingAssignmentInfo;

/// 一名学生的评分草稿（保存输入框的原始文本）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeDraft {
    pub points: String,
    pub feedback: String,
    points_revision: u64,
    feedback_revision: u64,
}

impl GradeDraft {
    fn from_student(student: &Student) -> Self {
        Self {
            points: student
                .earned_points
                .map(|p| p.to_string())
                .unwrap_or_default(),
            feedback: student.feedback.clone().unwrap_or_default(),
            ..Default::default()
        }
    }

    pub fn revision(&self, field: GradingField) -> u64 {
        match field {
            GradingField::Points => self.points_revision,
            GradingField::Feedback => self.feedback_revision,
        }
    }
}

/// 一次草稿编辑的结果，自动保存时用它判断是否已被更新的编辑取代
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftEdit {
    pub student_id: String,
    pub field: GradingField,
    pub revision: u64,
}

/// 评分界面状态
#[derive(Debug)]
pub struct GradingSession {
    assignment: GradingAssignmentInfo,
    roster: Vec<Student>,
    selected: usize,
    drafts: HashMap<String, GradeDraft>,
    saved_at: Option<DateTime<Utc>>,
}

impl GradingSession {
    pub fn new(assignment: GradingAssignmentInfo, roster: Vec<Student>) -> Result<Self> {
        if roster.is_empty() {
            return Err(DashboardError::validation(format!(
                "grading roster for {} is empty",
                assignment.id
            )));
        }
        for student in &roster {
            student.validate(assignment.points)?;
        }

        let drafts = roster
            .iter()
            .map(|s| (s.id.clone(), GradeDraft::from_student(s)))
            .collect();

        Ok(Self {
            assignment,
            roster,
            selected: 0,
            drafts,
            saved_at: None,
        })
    }

    pub fn assignment(&self) -> &GradingAssignmentInfo {
        &self.assignment
    }

    pub fn roster(&self) -> &[Student] {
        &self.roster
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &Student {
        &self.roster[self.selected]
    }

    pub fn draft(&self, student_id: &str) -> Option<&GradeDraft> {
        self.drafts.get(student_id)
    }

    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.saved_at
    }

    pub fn has_previous(&self) -> bool {
        self.selected > 0
    }

    pub fn has_next(&self) -> bool {
        self.selected + 1 < self.roster.len()
    }

    pub fn select(&mut self, index: usize) -> Result<&Student> {
        if index >= self.roster.len() {
            return Err(DashboardError::validation(format!(
                "student index {index} out of range (roster has {} entries)",
                self.roster.len()
            )));
        }
        self.selected = index;
        self.saved_at = None;
        Ok(self.selected())
    }

    pub fn next(&mut self) -> &Student {
        let index = (self.selected + 1).min(self.roster.len() - 1);
        self.selected = index;
        self.saved_at = None;
        self.selected()
    }

    pub fn previous(&mut self) -> &Student {
        self.selected = self.selected.saturating_sub(1);
        self.saved_at = None;
        self.selected()
    }

    /// 编辑当前学生的草稿
    ///
    /// 没有提交文件的学生不可编辑；分数必须是 [0, 满分] 内的数字或留空。
    pub fn edit(&mut self, field: GradingField, value: String) -> Result<DraftEdit> {
        let student = &self.roster[self.selected];
        if !student.can_be_graded() {
            return Err(DashboardError::validation(format!(
                "{} has no submitted file and cannot be graded",
                student.name
            )));
        }
        if field == GradingField::Points {
            parse_points(&value, self.assignment.points)?;
        }

        let student_id = student.id.clone();
        let draft = self.drafts.entry(student_id.clone()).or_default();
        let revision = match field {
            GradingField::Points => {
                draft.points = value;
                draft.points_revision += 1;
                draft.points_revision
            }
            GradingField::Feedback => {
                draft.feedback = value;
                draft.feedback_revision += 1;
                draft.feedback_revision
            }
        };
        self.saved_at = None;

        Ok(DraftEdit {
            student_id,
            field,
            revision,
        })
    }

    pub fn edit_points(&mut self, value: impl Into<String>) -> Result<DraftEdit> {
        self.edit(GradingField::Points, value.into())
    }

    pub fn edit_feedback(&mut self, value: impl Into<String>) -> Result<DraftEdit> {
        self.edit(GradingField::Feedback, value.into())
    }

    /// 把草稿写回名单
    pub fn commit(&mut self, student_id: &str, at: DateTime<Utc>) -> Result<Student> {
        let max_points = self.assignment.points;
        let is_selected = self.roster[self.selected].id == student_id;
        let student = self
            .roster
            .iter_mut()
            .find(|s| s.id == student_id)
            .ok_or_else(|| DashboardError::not_found(format!("student {student_id}")))?;
        if !student.can_be_graded() {
            return Err(DashboardError::validation(format!(
                "{} has no submitted file and cannot be graded",
                student.name
            )));
        }

        let draft = self.drafts.get(student_id).cloned().unwrap_or_default();
        let earned = parse_points(&draft.points, max_points)?;
        let feedback = Some(draft.feedback.trim().to_string()).filter(|f| !f.is_empty());

        student.earned_points = earned;
        student.feedback = feedback;
        if earned.is_some() {
            student.submission_status = SubmissionStatus::Graded;
            student.graded_at = Some(at);
        } else {
            student.submission_status = SubmissionStatus::Submitted;
            student.graded_at = None;
        }

        // 保存提示只属于当前选中的学生
        if is_selected {
            self.saved_at = Some(at);
        }
        Ok(student.clone())
    }

    /// 仅当该字段没有更新的编辑时才提交，返回 None 表示已被取代
    pub fn commit_if_current(
        &mut self,
        edit: &DraftEdit,
        at: DateTime<Utc>,
    ) -> Result<Option<Student>> {
        let current = self
            .drafts
            .get(&edit.student_id)
            .map(|d| d.revision(edit.field))
            .unwrap_or_default();
        if current != edit.revision {
            return Ok(None);
        }
        self.commit(&edit.student_id, at).map(Some)
    }
}

/// 解析分数输入；空字符串表示清除分数
fn parse_points(raw: &str, max_points: f64) -> Result<Option<f64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let points: f64 = raw
        .parse()
        .map_err(|_| DashboardError::validation(format!("'{raw}' is not a number")))?;
    if !points.is_finite() || points < 0.0 || points > max_points {
        return Err(DashboardError::validation(format!(
            "points must be between 0 and {max_points}"
        )));
    }
    Ok(Some(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 12, 15, 0, 0).unwrap()
    }

    fn assignment() -> GradingAssignmentInfo {
        GradingAssignmentInfo {
            id: "cs61a-hw1".to_string(),
            name: "Homework 1: Recursion and Tree Recursion".to_string(),
            course_code: "CS 61A".to_string(),
            points: 100.0,
            due_date: at() - Duration::days(2),
            created_at: at() - Duration::days(9),
        }
    }

    fn student(id: &str, status: SubmissionStatus, file: Option<&str>, earned: Option<f64>) -> Student {
        Student {
            id: id.to_string(),
            name: format!("Student {id}"),
            submission_status: status,
            submitted_at: file.map(|_| at() - Duration::days(3)),
            file: file.map(str::to_string),
            earned_points: earned,
            feedback: earned.map(|_| "Nice".to_string()),
            graded_at: None,
        }
    }

    fn session() -> GradingSession {
        GradingSession::new(
            assignment(),
            vec![
                student("s1", SubmissionStatus::Graded, Some("hw1.pdf"), Some(95.0)),
                student("s2", SubmissionStatus::Submitted, Some("hw1_bob.pdf"), None),
                student("s3", SubmissionStatus::NotSubmitted, None, None),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_drafts_seeded_from_roster() {
        let session = session();
        let draft = session.draft("s1").unwrap();
        assert_eq!(draft.points, "95");
        assert_eq!(draft.feedback, "Nice");
        assert_eq!(session.draft("s2").unwrap().points, "");
        assert_eq!(session.selected().id, "s1");
    }

    #[test]
    fn test_empty_roster_rejected() {
        assert!(GradingSession::new(assignment(), vec![]).is_err());
    }

    #[test]
    fn test_navigation_clamps() {
        let mut session = session();
        assert!(!session.has_previous());
        assert_eq!(session.previous().id, "s1");
        assert_eq!(session.next().id, "s2");
        assert_eq!(session.next().id, "s3");
        assert!(!session.has_next());
        assert_eq!(session.next().id, "s3");
        assert!(session.select(3).is_err());
        assert_eq!(session.select(1).unwrap().id, "s2");
    }

    #[test]
    fn test_edit_and_commit() {
        let mut session = session();
        session.select(1).unwrap();

        let edit = session.edit_points("88").unwrap();
        assert_eq!(edit.student_id, "s2");
        assert_eq!(edit.revision, 1);
        session.edit_feedback("  Review problem 2.  ").unwrap();

        let saved = session.commit("s2", at()).unwrap();
        assert_eq!(saved.earned_points, Some(88.0));
        assert_eq!(saved.feedback.as_deref(), Some("Review problem 2."));
        assert_eq!(saved.submission_status, SubmissionStatus::Graded);
        assert_eq!(saved.graded_at, Some(at()));
        assert_eq!(session.saved_at(), Some(at()));

        // 选择其他学生会清除保存提示
        session.select(0).unwrap();
        assert_eq!(session.saved_at(), None);
    }

    #[test]
    fn test_clearing_points_reverts_to_submitted() {
        let mut session = session();
        session.edit_points("").unwrap();
        let saved = session.commit("s1", at()).unwrap();
        assert_eq!(saved.earned_points, None);
        assert_eq!(saved.submission_status, SubmissionStatus::Submitted);
    }

    #[test]
    fn test_edit_rejected_without_file() {
        let mut session = session();
        session.select(2).unwrap();
        let err = session.edit_points("50").unwrap_err();
        assert!(err.message().contains("cannot be graded"));
        assert!(session.commit("s3", at()).is_err());
    }

    #[test]
    fn test_invalid_points_rejected_and_draft_kept() {
        let mut session = session();
        assert!(session.edit_points("abc").is_err());
        assert!(session.edit_points("101").is_err());
        assert!(session.edit_points("-1").is_err());
        assert_eq!(session.draft("s1").unwrap().points, "95");
    }

    #[test]
    fn test_edit_clears_saved_at() {
        let mut session = session();
        session.commit("s1", at()).unwrap();
        assert!(session.saved_at().is_some());
        session.edit_feedback("Great work!").unwrap();
        assert_eq!(session.saved_at(), None);
    }

    #[test]
    fn test_commit_if_current_skips_superseded_edit() {
        let mut session = session();
        session.select(1).unwrap();
        let first = session.edit_points("70").unwrap();
        let second = session.edit_points("75").unwrap();

        assert_eq!(session.commit_if_current(&first, at()).unwrap(), None);
        let saved = session.commit_if_current(&second, at()).unwrap().unwrap();
        assert_eq!(saved.earned_points, Some(75.0));
    }

    #[test]
    fn test_commit_for_other_student_keeps_saved_at_clear() {
        let mut session = session();
        session.select(1).unwrap();
        let edit = session.edit_points("80").unwrap();
        session.select(0).unwrap();

        let saved = session.commit_if_current(&edit, at()).unwrap().unwrap();
        assert_eq!(saved.id, "s2");
        assert_eq!(saved.earned_points, Some(80.0));
        assert_eq!(session.saved_at(), None);
    }

    #[test]
    fn test_commit_unknown_student() {
        let mut session = session();
        let err = session.commit("nobody", at()).unwrap_err();
        assert_eq!(err.code(), "E003");
    }
}
