use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::courses::requests::UpdateCourseSettingsRequest;
use crate::services::CourseService;
use crate::utils::SafeCourseId;

// 懒加载的全局 COURSE_SERVICE 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// HTTP处理程序
pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req).await
}

pub async fn get_course(req: HttpRequest, course_id: SafeCourseId) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(&req, course_id.as_str()).await
}

pub async fn get_settings(req: HttpRequest, course_id: SafeCourseId) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_settings(&req, course_id.as_str()).await
}

pub async fn update_settings(
    req: HttpRequest,
    course_id: SafeCourseId,
    update: web::Json<UpdateCourseSettingsRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_settings(&req, course_id.as_str(), update.into_inner())
        .await
}

// 配置路由
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .service(web::resource("").route(web::get().to(list_courses)))
            .service(web::resource("/{id}").route(web::get().to(get_course)))
            .service(
                web::resource("/{id}/settings")
                    .route(web::get().to(get_settings))
                    .route(web::put().to(update_settings)),
            ),
    );
}
