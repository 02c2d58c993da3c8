use serde::Deserialize;

use crate::models::grading::entities::GradingField;

/// 选择名单中的学生
#[derive(Debug, Clone, Deserialize)]
pub struct SelectStudentRequest {
    pub index: usize,
}

/// 编辑当前学生的评分草稿
#[derive(Debug, Clone, Deserialize)]
pub struct EditDraftRequest {
    pub field: GradingField,
    pub value: String,
}
