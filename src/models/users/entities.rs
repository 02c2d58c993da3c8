use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Student,
    Instructor,
    Ta,
}

impl UserRole {
    /// 可以评分的角色
    pub fn can_grade(&self) -> bool {
        matches!(self, UserRole::Instructor | UserRole::Ta)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

impl User {
    /// 头像占位用的姓名缩写，最多两个字母
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// 用户与课程的多对多关系
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct Enrollment {
    pub user_id: String,
    pub course_id: String,
    pub role: UserRole,
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Alice Chen"), "AC");
        assert_eq!(initials("Prof. John DeNero"), "PJ");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_grading_roles() {
        assert!(UserRole::Instructor.can_grade());
        assert!(UserRole::Ta.can_grade());
        assert!(!UserRole::Student.can_grade());
    }
}
