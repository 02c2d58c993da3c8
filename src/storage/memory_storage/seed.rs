//! 演示数据
//!
//! 所有日期都相对于传入的 `now`，保证每次启动时截止日期分布一致。

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use super::MemoryState;
use crate::models::{
    announcements::entities::Announcement,
    assignments::entities::{Assignment, SubmissionStatus},
    courses::entities::{Course, CourseSettings, GradeCalculation, LatePolicy, Season},
    grading::entities::Student,
    users::entities::{Enrollment, User, UserRole},
};
use crate::utils::random_code::generate_enrollment_code;

// (id, 代码, 名称, 颜色, 学生数, 成绩)
const COURSES: [(&str, &str, &str, &str, u32, Option<f64>); 7] = [
    ("cs61a", "CS 61A", "Structure and Interpretation of Computer Programs", "#4F46E5", 5, Some(95.0)),
    ("biol101", "BIOL 101", "Introduction to Biology", "#10B981", 320, Some(92.0)),
    ("eng203", "ENGL 203", "Advanced Composition", "#3B82F6", 85, Some(87.0)),
    ("cs150", "CS 150", "Data Structures and Algorithms", "#8B5CF6", 180, Some(95.0)),
    ("hist101", "HIST 101", "World History", "#EAB308", 150, Some(78.0)),
    ("math201", "MATH 201", "Calculus II", "#F97316", 220, None),
    ("psych101", "PSYC 101", "Introduction to Psychology", "#EC4899", 280, Some(89.0)),
];

const SEMESTER: &str = "Spring 2025";

// (id, 课程 ID, 名称, 距今天数, 满分, 状态, 得分)
type AssignmentRow = (&'static str, &'static str, &'static str, i64, f64, SubmissionStatus, Option<f64>);

const ASSIGNMENTS: [AssignmentRow; 18] = [
    ("cs61a-hw1", "cs61a", "Homework 1: Recursion and Tree Recursion", -1, 100.0, SubmissionStatus::Graded, Some(95.0)),
    ("cs61a-lab2", "cs61a", "Lab 2: Higher Order Functions", 3, 50.0, SubmissionStatus::NotSubmitted, None),
    ("biol-quiz4", "biol101", "Chapter 4 Quiz", -5, 50.0, SubmissionStatus::Graded, Some(45.0)),
    ("biol-quiz5", "biol101", "Chapter 5 Quiz", 1, 50.0, SubmissionStatus::NotSubmitted, None),
    ("biol-lab3", "biol101", "Lab Report 3", 5, 100.0, SubmissionStatus::NotSubmitted, None),
    ("biol-discussion", "biol101", "Discussion Post: Cell Division", 7, 30.0, SubmissionStatus::NotSubmitted, None),
    ("eng-essay-draft", "eng203", "Essay Draft", -2, 100.0, SubmissionStatus::NotSubmitted, None),
    ("eng-peer-review", "eng203", "Peer Review Assignment", 0, 50.0, SubmissionStatus::NotSubmitted, None),
    ("eng-final-essay", "eng203", "Final Essay", 13, 200.0, SubmissionStatus::NotSubmitted, None),
    ("cs-prog3", "cs150", "Programming Assignment 3", -7, 150.0, SubmissionStatus::Graded, Some(140.0)),
    ("cs-prog4", "cs150", "Programming Assignment 4", 4, 150.0, SubmissionStatus::NotSubmitted, None),
    ("cs-midterm", "cs150", "Midterm Exam", 11, 300.0, SubmissionStatus::NotSubmitted, None),
    ("hist-quiz7", "hist101", "Reading Quiz Chapter 7", 1, 40.0, SubmissionStatus::NotSubmitted, None),
    ("hist-primary", "hist101", "Primary Source Analysis", 6, 100.0, SubmissionStatus::NotSubmitted, None),
    ("hist-discussion", "hist101", "Discussion Response", 8, 30.0, SubmissionStatus::NotSubmitted, None),
    ("hist-outline", "hist101", "Research Paper Outline", 10, 80.0, SubmissionStatus::NotSubmitted, None),
    ("math-ps6", "math201", "Problem Set 6", 0, 100.0, SubmissionStatus::NotSubmitted, None),
    ("math-ps7", "math201", "Problem Set 7", 7, 100.0, SubmissionStatus::NotSubmitted, None),
];

pub fn build(now: DateTime<Utc>) -> MemoryState {
    let days = Duration::days;

    let courses: Vec<Course> = COURSES
        .iter()
        .map(|&(id, code, name, color, student_count, grade)| Course {
            id: id.to_string(),
            code: code.to_string(),
            name: name.to_string(),
            semester: SEMESTER.to_string(),
            color: color.to_string(),
            student_count,
            grade,
        })
        .collect();

    let settings = courses
        .iter()
        .map(|course| (course.id.clone(), default_settings(course)))
        .collect();

    let assignments: Vec<Assignment> = ASSIGNMENTS
        .iter()
        .filter_map(|&(id, course_id, name, offset, points, status, earned)| {
            let course = courses.iter().find(|c| c.id == course_id)?;
            Some(Assignment {
                id: id.to_string(),
                course_id: course_id.to_string(),
                course_code: course.code.clone(),
                course_color: course.color.clone(),
                name: name.to_string(),
                due_date: now + days(offset),
                status,
                points,
                earned_points: earned,
            })
        })
        .collect();

    let mut assignment_created = HashMap::new();
    assignment_created.insert("cs61a-hw1".to_string(), now - days(14));

    let mut submissions = HashMap::new();
    submissions.insert("cs61a-hw1".to_string(), hw1_roster(now));

    let users = vec![
        user("u-denero", "instructor@example.com", "Prof. John DeNero", UserRole::Instructor),
        user("u-sarah", "sarah.johnson@example.com", "TA Sarah Johnson", UserRole::Ta),
        user("s1", "alice@example.com", "Alice Chen", UserRole::Student),
        user("s2", "bob@example.com", "Bob Smith", UserRole::Student),
        user("s3", "carol@example.com", "Carol Wu", UserRole::Student),
        user("s4", "david@example.com", "David Kim", UserRole::Student),
        user("s5", "eva@example.com", "Eva Martinez", UserRole::Student),
    ];
    let enrollments = users
        .iter()
        .map(|u| Enrollment {
            user_id: u.id.clone(),
            course_id: "cs61a".to_string(),
            role: u.role,
        })
        .collect();

    let announcements = vec![
        Announcement {
            id: "a1".to_string(),
            course_id: "cs61a".to_string(),
            title: "Homework 1 Due Date Extended".to_string(),
            content: "Due to the holiday, HW1 is now due Feb 12 instead of Feb 10. Please use the extra time wisely to review your solutions.".to_string(),
            posted_by: "Prof. John DeNero".to_string(),
            posted_at: now - Duration::hours(2),
            is_pinned: true,
        },
        Announcement {
            id: "a2".to_string(),
            course_id: "cs61a".to_string(),
            title: "Office Hours Updated".to_string(),
            content: "Starting this week, office hours will be held in Soda 271 on Tuesdays and Thursdays from 2-4 PM. Please check the calendar for the latest schedule.".to_string(),
            posted_by: "TA Sarah Johnson".to_string(),
            posted_at: now - days(1),
            is_pinned: false,
        },
        Announcement {
            id: "a3".to_string(),
            course_id: "cs61a".to_string(),
            title: "Midterm 1 Information".to_string(),
            content: "Midterm 1 will cover lectures 1-10 and homework 1-3. A review session will be held on Friday at 5 PM in Wheeler Auditorium.".to_string(),
            posted_by: "Prof. John DeNero".to_string(),
            posted_at: now - days(3),
            is_pinned: false,
        },
    ];

    MemoryState {
        users,
        enrollments,
        courses,
        settings,
        assignments,
        assignment_created,
        submissions,
        announcements,
    }
}

fn default_settings(course: &Course) -> CourseSettings {
    let (semester, year) =
        Season::parse_label(&course.semester).unwrap_or((Season::Spring, "2025".to_string()));
    let enrollment_code = if course.id == "cs61a" {
        "CS61A-SP25-7X9K".to_string()
    } else {
        generate_enrollment_code(&course.code, semester, &year)
    };

    CourseSettings {
        course_code: course.code.clone(),
        course_name: course.name.clone(),
        semester,
        year,
        color: course.color.clone(),
        enrollment_limit: None,
        allow_self_enrollment: true,
        late_policy: LatePolicy::Deduct,
        late_penalty: 10.0,
        grade_calculation: GradeCalculation::Simple,
        show_grades: true,
        hide_student_names: true,
        enrollment_code,
    }
}

fn user(id: &str, email: &str, name: &str, role: UserRole) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        role,
    }
}

fn hw1_roster(now: DateTime<Utc>) -> Vec<Student> {
    let days = Duration::days;
    let submitted = |id: &str, name: &str, ago: i64, file: &str| Student {
        id: id.to_string(),
        name: name.to_string(),
        submission_status: SubmissionStatus::Submitted,
        submitted_at: Some(now - days(ago)),
        file: Some(file.to_string()),
        earned_points: None,
        feedback: None,
        graded_at: None,
    };
    let graded = |student: Student, earned: f64, feedback: &str, graded_ago: i64| Student {
        submission_status: SubmissionStatus::Graded,
        earned_points: Some(earned),
        feedback: Some(feedback.to_string()),
        graded_at: Some(now - days(graded_ago)),
        ..student
    };

    vec![
        graded(
            submitted("s1", "Alice Chen", 5, "homework1.pdf"),
            95.0,
            "Great work! Minor issue on problem 3.",
            1,
        ),
        submitted("s2", "Bob Smith", 2, "hw1_bob.pdf"),
        Student {
            id: "s3".to_string(),
            name: "Carol Wu".to_string(),
            submission_status: SubmissionStatus::NotSubmitted,
            submitted_at: None,
            file: None,
            earned_points: None,
            feedback: None,
            graded_at: None,
        },
        graded(
            submitted("s4", "David Kim", 6, "hw1_david.pdf"),
            88.0,
            "Good effort. Review problem 2 concepts.",
            1,
        ),
        // 截止后半天提交
        Student {
            submitted_at: Some(now - Duration::hours(12)),
            ..submitted("s5", "Eva Martinez", 0, "homework1_eva.pdf")
        },
    ]
}
