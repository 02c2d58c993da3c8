pub mod announcements;

pub mod assignments;

pub mod courses;

pub mod dashboard;

pub mod grading;

pub mod system;

pub use announcements::configure_announcements_routes;
pub use assignments::configure_assignments_routes;
pub use courses::configure_courses_routes;
pub use dashboard::configure_dashboard_routes;
pub use grading::configure_grading_routes;
pub use system::configure_system_routes;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test, web};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::time::Duration;

    use crate::grading::GradingDesk;
    use crate::storage::{Storage, memory_storage::MemoryStorage};
    use crate::utils::{json_error_handler, query_error_handler};

    async fn app_data() -> (Arc<dyn Storage>, web::Data<GradingDesk>) {
        let storage: Arc<dyn Storage> =
            Arc::new(MemoryStorage::seeded(chrono::Utc::now()).unwrap());
        let desk = GradingDesk::open(storage.clone(), "cs61a-hw1", Duration::from_millis(1000))
            .await
            .unwrap();
        (storage, web::Data::new(desk))
    }

    macro_rules! test_app {
        ($storage:expr, $desk:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                    .app_data(web::Data::new($storage.clone()))
                    .app_data($desk.clone())
                    .configure(configure_dashboard_routes)
                    .configure(configure_courses_routes)
                    .configure(configure_assignments_routes)
                    .configure(configure_announcements_routes)
                    .configure(configure_grading_routes)
                    .configure(configure_system_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_dashboard_stats() {
        let (storage, desk) = app_data().await;
        let app = test_app!(storage, desk);

        let req = test::TestRequest::get()
            .uri("/api/v1/dashboard/stats")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["stats"]["total_count"], 18);
        assert_eq!(body["data"]["stats"]["graded_count"], 3);
        assert_eq!(body["data"]["cards"][3]["value"], "3/18");

        let req = test::TestRequest::get()
            .uri("/api/v1/dashboard/stats?course_id=math201")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["cards"][2]["value"], "N/A");
        assert!(body["data"]["stats"]["average_grade"].is_null());
    }

    #[actix_web::test]
    async fn test_unknown_course() {
        let (storage, desk) = app_data().await;
        let app = test_app!(storage, desk);

        let req = test::TestRequest::get()
            .uri("/api/v1/courses/nope")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get()
            .uri("/api/v1/dashboard/stats?course_id=nope")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_courses_and_settings() {
        let (storage, desk) = app_data().await;
        let app = test_app!(storage, desk);

        let req = test::TestRequest::get().uri("/api/v1/courses").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["total"], 7);

        let req = test::TestRequest::get()
            .uri("/api/v1/courses/cs61a/settings")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["enrollment_code"], "CS61A-SP25-7X9K");
        assert_eq!(body["data"]["late_policy"], "deduct");

        let update = json!({
            "course_code": "CS 61A",
            "course_name": "SICP",
            "semester": "Fall",
            "year": "2025",
            "color": "#123456",
            "enrollment_limit": 400,
            "allow_self_enrollment": false,
            "late_policy": "none",
            "grade_calculation": "weighted",
            "show_grades": true,
            "hide_student_names": false
        });
        let req = test::TestRequest::put()
            .uri("/api/v1/courses/cs61a/settings")
            .set_json(&update)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["enrollment_code"], "CS61A-SP25-7X9K");

        let req = test::TestRequest::get()
            .uri("/api/v1/courses/cs61a")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["semester"], "Fall 2025");
        assert_eq!(body["data"]["name"], "SICP");
        assert_eq!(body["data"]["enrolled_students"], 5);
        assert_eq!(body["data"]["staff"][0]["role"], "instructor");

        let mut invalid = update.clone();
        invalid["color"] = json!("purple");
        let req = test::TestRequest::put()
            .uri("/api/v1/courses/cs61a/settings")
            .set_json(&invalid)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_assignments_and_bad_query() {
        let (storage, desk) = app_data().await;
        let app = test_app!(storage, desk);

        let req = test::TestRequest::get()
            .uri("/api/v1/assignments?course_id=eng203&proximity=overdue")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["total"], 1);
        assert_eq!(body["data"]["items"][0]["id"], "eng-essay-draft");
        assert_eq!(body["data"]["items"][0]["due_label"], "Overdue");

        let req = test::TestRequest::get()
            .uri("/api/v1/assignments?proximity=someday")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_announcements_and_health() {
        let (storage, desk) = app_data().await;
        let app = test_app!(storage, desk);

        let req = test::TestRequest::get()
            .uri("/api/v1/announcements?course_id=cs61a")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["total"], 3);
        assert_eq!(body["data"]["items"][0]["is_pinned"], true);

        let req = test::TestRequest::get()
            .uri("/api/v1/system/health")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["success"], true);
        assert_eq!(body["data"]["user_count"], 7);
    }

    #[actix_web::test]
    async fn test_grading_flow() {
        let (storage, desk) = app_data().await;
        let app = test_app!(storage, desk);

        let req = test::TestRequest::get().uri("/api/v1/grading").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["position_label"], "1 of 5");

        let req = test::TestRequest::post()
            .uri("/api/v1/grading/select")
            .set_json(json!({ "index": 2 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["selected"]["can_grade"], false);

        // 没有提交文件的学生不可编辑
        let req = test::TestRequest::put()
            .uri("/api/v1/grading/draft")
            .set_json(json!({ "field": "points", "value": "50" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/v1/grading/previous")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["selected"]["student"]["id"], "s2");

        let req = test::TestRequest::put()
            .uri("/api/v1/grading/draft")
            .set_json(json!({ "field": "points", "value": "84" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["revision"], 1);
        assert_eq!(body["data"]["autosave_in_ms"], 1000);

        let req = test::TestRequest::post()
            .uri("/api/v1/grading/save")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["submission_status"], "graded");

        let roster = storage.list_submissions("cs61a-hw1").await.unwrap();
        let bob = roster.iter().find(|s| s.id == "s2").unwrap();
        assert_eq!(bob.earned_points, Some(84.0));

        let req = test::TestRequest::post()
            .uri("/api/v1/grading/select")
            .set_json(json!({ "index": 9 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
