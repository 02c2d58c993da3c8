use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::GradingService;
use crate::models::{
    ApiResponse, ErrorCode,
    grading::{requests::EditDraftRequest, responses::DraftEditResponse},
};

pub async fn edit_draft(
    service: &GradingService,
    request: &HttpRequest,
    edit: EditDraftRequest,
) -> ActixResult<HttpResponse> {
    let desk = service.get_desk(request);

    match desk.edit(edit.field, edit.value).await {
        Ok(applied) => {
            debug!(
                "Draft {} for {} at revision {}",
                applied.field.as_str(),
                applied.student_id,
                applied.revision
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                DraftEditResponse {
                    student_id: applied.student_id,
                    field: applied.field,
                    revision: applied.revision,
                    autosave_in_ms: desk.autosave_idle().as_millis() as u64,
                },
                "Draft updated",
            )))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::GradingEditRejected,
            e.message(),
        ))),
    }
}
