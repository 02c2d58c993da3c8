use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::grading::requests::{EditDraftRequest, SelectStudentRequest};
use crate::services::GradingService;

// 懒加载的全局 GRADING_SERVICE 实例
static GRADING_SERVICE: Lazy<GradingService> = Lazy::new(GradingService::new_lazy);

pub async fn get_session(req: HttpRequest) -> ActixResult<HttpResponse> {
    GRADING_SERVICE.get_session(&req).await
}

pub async fn select_student(
    req: HttpRequest,
    select: web::Json<SelectStudentRequest>,
) -> ActixResult<HttpResponse> {
    GRADING_SERVICE
        .select_student(&req, select.into_inner())
        .await
}

pub async fn next_student(req: HttpRequest) -> ActixResult<HttpResponse> {
    GRADING_SERVICE.next_student(&req).await
}

pub async fn previous_student(req: HttpRequest) -> ActixResult<HttpResponse> {
    GRADING_SERVICE.previous_student(&req).await
}

pub async fn edit_draft(
    req: HttpRequest,
    edit: web::Json<EditDraftRequest>,
) -> ActixResult<HttpResponse> {
    GRADING_SERVICE.edit_draft(&req, edit.into_inner()).await
}

pub async fn save(req: HttpRequest) -> ActixResult<HttpResponse> {
    GRADING_SERVICE.save(&req).await
}

// 配置路由
pub fn configure_grading_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grading")
            .service(web::resource("").route(web::get().to(get_session)))
            .route("/select", web::post().to(select_student))
            .route("/next", web::post().to(next_student))
            .route("/previous", web::post().to(previous_student))
            .route("/draft", web::put().to(edit_draft))
            .route("/save", web::post().to(save)),
    );
}
