pub mod draft;
pub mod save;
pub mod select;
pub mod view;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::grading::GradingDesk;
use crate::models::grading::requests::{EditDraftRequest, SelectStudentRequest};

pub struct GradingService;

impl GradingService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_desk<'a>(&self, request: &'a HttpRequest) -> &'a GradingDesk {
        request
            .app_data::<web::Data<GradingDesk>>()
            .expect("Grading desk not found in app data")
            .get_ref()
    }

    // 获取评分界面状态
    pub async fn get_session(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        view::get_session(self, request).await
    }

    // 选择名单中的学生
    pub async fn select_student(
        &self,
        request: &HttpRequest,
        select: SelectStudentRequest,
    ) -> ActixResult<HttpResponse> {
        select::select_student(self, request, select).await
    }

    pub async fn next_student(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        select::step(self, request, select::Step::Next).await
    }

    pub async fn previous_student(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        select::step(self, request, select::Step::Previous).await
    }

    // 编辑草稿，空闲后自动保存
    pub async fn edit_draft(
        &self,
        request: &HttpRequest,
        edit: EditDraftRequest,
    ) -> ActixResult<HttpResponse> {
        draft::edit_draft(self, request, edit).await
    }

    // 立即保存当前学生
    pub async fn save(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        save::save_selected(self, request).await
    }
}
