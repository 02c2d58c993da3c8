pub mod get;
pub mod list;
pub mod settings;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::calc::DayBoundary;
use crate::models::{
    assignments::{entities::Assignment, responses::ClassifiedAssignment},
    courses::{
        entities::Course,
        requests::UpdateCourseSettingsRequest,
        responses::{CourseDetailResponse, CourseResponse},
    },
    users::entities::Enrollment,
};
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取课程卡片列表
    pub async fn list_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_courses(self, request).await
    }

    // 根据课程 ID 获取课程
    pub async fn get_course(&self, request: &HttpRequest, course_id: &str) -> ActixResult<HttpResponse> {
        get::get_course(self, request, course_id).await
    }

    pub async fn get_settings(
        &self,
        request: &HttpRequest,
        course_id: &str,
    ) -> ActixResult<HttpResponse> {
        settings::get_settings(self, request, course_id).await
    }

    pub async fn update_settings(
        &self,
        request: &HttpRequest,
        course_id: &str,
        update: UpdateCourseSettingsRequest,
    ) -> ActixResult<HttpResponse> {
        settings::update_settings(self, request, course_id, update).await
    }
}

/// 课程卡片：即将到期的作业与待完成数量按当前时间重新计算
pub(crate) fn course_card(
    course: Course,
    assignments: &[Assignment],
    now: &DateTime<Utc>,
    zone: &impl DayBoundary,
) -> CourseResponse {
    let mut upcoming: Vec<ClassifiedAssignment> = assignments
        .iter()
        .filter(|a| a.course_id == course.id && a.is_pending())
        .cloned()
        .map(|a| ClassifiedAssignment::classify(a, now, zone))
        .filter(|a| !a.is_overdue)
        .collect();
    upcoming.sort_by_key(|a| a.due_date);

    CourseResponse {
        assignments_due: upcoming.len(),
        upcoming_assignments: upcoming,
        id: course.id,
        code: course.code,
        name: course.name,
        semester: course.semester,
        color: course.color,
        student_count: course.student_count,
        grade: course.grade,
    }
}

/// 把选课记录分为教学人员与学生人数
pub(crate) fn course_detail(card: CourseResponse, enrollments: Vec<Enrollment>) -> CourseDetailResponse {
    let (staff, students): (Vec<_>, Vec<_>) =
        enrollments.into_iter().partition(|e| e.role.can_grade());
    CourseDetailResponse {
        course: card,
        staff,
        enrolled_students: students.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;
    use crate::storage::memory_storage::seed;

    #[test]
    fn test_course_cards_from_seed() {
        let now = Utc::now();
        let state = seed::build(now);
        let card = |id: &str| {
            let course = state.courses.iter().find(|c| c.id == id).unwrap().clone();
            course_card(course, &state.assignments, &now, &crate::calc::DayZone::Local)
        };

        // 逾期的 Essay Draft 不计入
        let eng = card("eng203");
        assert_eq!(eng.assignments_due, 2);
        assert_eq!(eng.upcoming_assignments[0].name, "Peer Review Assignment");

        let biol = card("biol101");
        assert_eq!(biol.assignments_due, 3);

        let psych = card("psych101");
        assert_eq!(psych.assignments_due, 0);
        assert!(psych.upcoming_assignments.is_empty());
    }

    #[test]
    fn test_course_detail_splits_staff() {
        let now = Utc::now();
        let state = seed::build(now);
        let course = state.courses.iter().find(|c| c.id == "cs61a").unwrap().clone();
        let card = course_card(course, &state.assignments, &now, &crate::calc::DayZone::Local);
        let enrollments = state
            .enrollments
            .iter()
            .filter(|e| e.course_id == "cs61a")
            .cloned()
            .collect();

        let detail = course_detail(card, enrollments);
        assert_eq!(detail.enrolled_students, 5);
        let roles: Vec<UserRole> = detail.staff.iter().map(|e| e.role).collect();
        assert_eq!(roles, [UserRole::Instructor, UserRole::Ta]);
        assert_eq!(detail.course.id, "cs61a");
    }
}
