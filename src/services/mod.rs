pub mod announcements;
pub mod assignments;
pub mod courses;
pub mod dashboard;
pub mod grading;
pub mod system;

pub use announcements::AnnouncementService;
pub use assignments::AssignmentService;
pub use courses::CourseService;
pub use dashboard::DashboardService;
pub use grading::GradingService;
pub use system::SystemService;
