use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradingService;
use crate::calc::{DayBoundary, timeline};
use crate::config::AppConfig;
use crate::grading::GradingSession;
use crate::models::{
    ApiResponse,
    grading::responses::{DraftView, GradingSessionResponse, RosterItem, SelectedStudentView},
    users::entities::initials,
};

/// 把会话状态渲染为界面所需的视图
pub(crate) fn session_view(session: &GradingSession, zone: &impl DayBoundary) -> GradingSessionResponse {
    let assignment = session.assignment().clone();
    let selected_index = session.selected_index();
    let student = session.selected().clone();

    let roster = session
        .roster()
        .iter()
        .enumerate()
        .map(|(index, s)| RosterItem {
            index,
            id: s.id.clone(),
            name: s.name.clone(),
            initials: initials(&s.name),
            submission_status: s.submission_status,
            is_selected: index == selected_index,
        })
        .collect();

    let draft = session
        .draft(&student.id)
        .map(|d| DraftView {
            points: d.points.clone(),
            feedback: d.feedback.clone(),
        })
        .unwrap_or(DraftView {
            points: String::new(),
            feedback: String::new(),
        });

    let submitted_label = match &student.submitted_at {
        Some(at) => format!("Submitted {}", zone.format_at(at, "%b %-d, %Y at %-I:%M %p")),
        None => "No submission received".to_string(),
    };

    let selected = SelectedStudentView {
        submitted_label,
        is_late: student.is_late(&assignment.due_date),
        can_grade: student.can_be_graded(),
        timeline: timeline(assignment.created_at, student.submitted_at, student.graded_at).to_vec(),
        draft,
        student,
    };

    GradingSessionResponse {
        position_label: format!("{} of {}", selected_index + 1, session.roster().len()),
        has_previous: session.has_previous(),
        has_next: session.has_next(),
        saved_at: session.saved_at(),
        assignment,
        roster,
        selected_index,
        selected,
    }
}

pub async fn get_session(
    service: &GradingService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let desk = service.get_desk(request);
    let session = desk.read().await;
    let view = session_view(&session, &AppConfig::get().day_zone());
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        view,
        "Grading session retrieved successfully",
    )))
}
