pub mod announcements;
pub mod assignments;
pub mod common;
pub mod courses;
pub mod dashboard;
pub mod grading;
pub mod system;
pub mod users;

pub use common::response::ApiResponse;

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 请求错误
    BadRequest = 1000,

    // 课程相关
    CourseNotFound = 2001,
    CourseSettingsInvalid = 2002,

    // 评分相关
    GradingStudentNotFound = 4001,
    GradingEditRejected = 4002,

    // 服务端错误
    StorageUnavailable = 5001,
}
