use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::{debug, info, warn};

use super::autosave::AutoSaver;
use super::session::{DraftEdit, GradingSession};
use crate::errors::{DashboardError, Result};
use crate::models::grading::entities::{GradingField, Student};
use crate::storage::Storage;

/// 自动保存以（学生, 字段）为键，分数和评语互不取代
pub type DraftKey = (String, GradingField);

/// 评分界面的共享状态与自动保存
pub struct GradingDesk {
    session: Arc<RwLock<GradingSession>>,
    autosaver: AutoSaver<DraftKey>,
    storage: Arc<dyn Storage>,
}

impl GradingDesk {
    pub fn new(session: GradingSession, storage: Arc<dyn Storage>, idle: Duration) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            autosaver: AutoSaver::new(idle),
            storage,
        }
    }

    /// 从存储中载入作业与名单
    pub async fn open(storage: Arc<dyn Storage>, assignment_id: &str, idle: Duration) -> Result<Self> {
        let assignment = storage
            .get_grading_assignment(assignment_id)
            .await?
            .ok_or_else(|| DashboardError::not_found(format!("assignment {assignment_id}")))?;
        let roster = storage.list_submissions(assignment_id).await?;
        let session = GradingSession::new(assignment, roster)?;
        info!(
            "Grading desk opened for {} ({} students)",
            assignment_id,
            session.roster().len()
        );
        Ok(Self::new(session, storage, idle))
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, GradingSession> {
        self.session.read().await
    }

    pub fn autosave_idle(&self) -> Duration {
        self.autosaver.idle()
    }

    pub fn pending_saves(&self) -> usize {
        self.autosaver.pending_count()
    }

    pub async fn select(&self, index: usize) -> Result<()> {
        self.session.write().await.select(index).map(|_| ())
    }

    pub async fn next(&self) {
        self.session.write().await.next();
    }

    pub async fn previous(&self) {
        self.session.write().await.previous();
    }

    /// 编辑当前学生的草稿，并在空闲窗口后自动保存
    pub async fn edit(&self, field: GradingField, value: String) -> Result<DraftEdit> {
        let edit = self.session.write().await.edit(field, value)?;

        let session = Arc::clone(&self.session);
        let storage = Arc::clone(&self.storage);
        let pending = edit.clone();
        self.autosaver
            .schedule((edit.student_id.clone(), field), async move {
                let committed = {
                    let mut session = session.write().await;
                    let assignment_id = session.assignment().id.clone();
                    session
                        .commit_if_current(&pending, Utc::now())
                        .map(|student| student.map(|s| (assignment_id, s)))
                };
                match committed {
                    Ok(Some((assignment_id, student))) => {
                        match storage.save_grade(&assignment_id, student).await {
                            Ok(()) => debug!(
                                "Autosaved {} for student {}",
                                pending.field.as_str(),
                                pending.student_id
                            ),
                            Err(e) => warn!("Autosave for student {} failed: {}", pending.student_id, e),
                        }
                    }
                    Ok(None) => debug!("Autosave for student {} skipped: superseded", pending.student_id),
                    Err(e) => warn!("Autosave for student {} rejected: {}", pending.student_id, e),
                }
            });

        Ok(edit)
    }

    /// 立即保存当前学生，取消其待执行的自动保存
    pub async fn save_selected(&self) -> Result<Student> {
        let (assignment_id, student) = {
            let mut session = self.session.write().await;
            let student_id = session.selected().id.clone();
            for field in [GradingField::Points, GradingField::Feedback] {
                self.autosaver.cancel(&(student_id.clone(), field));
            }
            let student = session.commit(&student_id, Utc::now())?;
            (session.assignment().id.clone(), student)
        };

        self.storage.save_grade(&assignment_id, student.clone()).await?;
        info!("Saved grade for student {} on {}", student.id, assignment_id);
        Ok(student)
    }

    /// 关闭界面，丢弃尚未触发的自动保存
    pub fn shutdown(&self) {
        let pending = self.pending_saves();
        if pending > 0 {
            warn!("Discarding {} pending autosave(s)", pending);
        }
        self.autosaver.cancel_all();
    }
}
