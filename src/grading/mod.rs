//! 评分界面
//!
//! - `session`: 显式状态容器（选择学生 → 载入草稿 → 编辑 → 提交）
//! - `autosave`: 空闲窗口后自动保存，新编辑会取消旧的计时器
//! - `desk`: 把两者与存储层组合起来供服务层使用

pub mod autosave;
pub mod desk;
pub mod session;

pub use autosave::AutoSaver;
pub use desk::{DraftKey, GradingDesk};
pub use session::{DraftEdit, GradeDraft, GradingSession};
