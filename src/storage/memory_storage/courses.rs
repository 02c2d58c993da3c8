//! 课程存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::courses::entities::{Course, CourseSettings};

impl MemoryStorage {
    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        Ok(self.state.read().await.courses.clone())
    }

    pub async fn get_course_by_id_impl(&self, course_id: &str) -> Result<Option<Course>> {
        let state = self.state.read().await;
        Ok(state.courses.iter().find(|c| c.id == course_id).cloned())
    }

    pub async fn get_course_settings_impl(
        &self,
        course_id: &str,
    ) -> Result<Option<CourseSettings>> {
        Ok(self.state.read().await.settings.get(course_id).cloned())
    }

    /// 更新课程设置；课程不存在时返回 None
    pub async fn update_course_settings_impl(
        &self,
        course_id: &str,
        settings: CourseSettings,
    ) -> Result<Option<CourseSettings>> {
        settings.validate()?;

        let mut state = self.state.write().await;
        let Some(course) = state.courses.iter_mut().find(|c| c.id == course_id) else {
            return Ok(None);
        };
        course.code = settings.course_code.clone();
        course.name = settings.course_name.clone();
        course.color = settings.color.clone();
        course.semester = settings.semester_label();

        // 作业卡片上冗余保存了课程代码和颜色
        for assignment in state.assignments.iter_mut().filter(|a| a.course_id == course_id) {
            assignment.course_code = settings.course_code.clone();
            assignment.course_color = settings.color.clone();
        }

        state
            .settings
            .insert(course_id.to_string(), settings.clone());
        Ok(Some(settings))
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::memory_storage::MemoryStorage;
    use chrono::Utc;

    #[tokio::test]
    async fn test_update_settings_propagates_to_course_and_assignments() {
        let storage = MemoryStorage::seeded(Utc::now()).unwrap();
        let mut settings = storage.get_course_settings_impl("cs150").await.unwrap().unwrap();
        settings.course_code = "CS 151".to_string();
        settings.color = "#111827".to_string();

        let updated = storage
            .update_course_settings_impl("cs150", settings)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.course_code, "CS 151");

        let course = storage.get_course_by_id_impl("cs150").await.unwrap().unwrap();
        assert_eq!(course.code, "CS 151");
        assert_eq!(course.color, "#111827");

        let assignments = storage.list_assignments_impl(Some("cs150")).await.unwrap();
        assert!(!assignments.is_empty());
        assert!(assignments.iter().all(|a| a.course_code == "CS 151"));
    }

    #[tokio::test]
    async fn test_update_settings_rejects_invalid_and_unknown() {
        let storage = MemoryStorage::seeded(Utc::now()).unwrap();
        let mut settings = storage.get_course_settings_impl("cs61a").await.unwrap().unwrap();

        let unknown = storage
            .update_course_settings_impl("nope", settings.clone())
            .await
            .unwrap();
        assert!(unknown.is_none());

        settings.color = "blue".to_string();
        assert!(storage.update_course_settings_impl("cs61a", settings).await.is_err());
        let course = storage.get_course_by_id_impl("cs61a").await.unwrap().unwrap();
        assert_eq!(course.color, "#4F46E5");
    }
}
