//! Built-in demo dataset rendered by the dashboards.

use crate::{
    AttendanceEntry, AttendanceStatus, ClassId, ClassRecord, RecentActivity, StudentRecord,
    SubjectAttendance, UpcomingClass,
};

/// Display name of the signed-in teacher.
pub const DEMO_TEACHER_NAME: &str = "Mr. Teacher";

/// Load the demo student profile.
pub fn load_demo_student() -> StudentRecord {
    StudentRecord {
        name: "Jane Doe".to_string(),
        roll_no: "S2023045".to_string(),
        overall_attendance: 78,
        defaulter_status: "Warning".to_string(),
        reward_points: 120,
        streak_days: 5,
        avatar: "JD".to_string(),
        trend: vec![60, 70, 80, 75, 85, 90, 78],
    }
}

/// Load subject-wise attendance for the demo student.
pub fn load_demo_subjects() -> Vec<SubjectAttendance> {
    [
        ("Web Dev Basics", "WD101", 72),
        ("Data Structures", "CS201", 81),
        ("DBMS", "CS301", 88),
    ]
    .into_iter()
    .map(|(name, code, attendance)| SubjectAttendance {
        name: name.to_string(),
        code: code.to_string(),
        attendance,
    })
    .collect()
}

/// Load the demo student's recent attendance.
pub fn load_demo_recent_activity() -> Vec<RecentActivity> {
    vec![
        RecentActivity {
            subject: "Web Dev Basics".to_string(),
            date: "10 Sep".to_string(),
            time: "10:00 AM".to_string(),
            status: AttendanceStatus::Absent,
        },
        RecentActivity {
            subject: "DBMS".to_string(),
            date: "9 Sep".to_string(),
            time: "1:00 PM".to_string(),
            status: AttendanceStatus::Present,
        },
    ]
}

/// Load the demo student's upcoming classes.
pub fn load_demo_upcoming_classes() -> Vec<UpcomingClass> {
    vec![
        UpcomingClass {
            subject: "Web Dev Basics".to_string(),
            time: "Tomorrow 10:00 AM".to_string(),
            room: "Lab 3".to_string(),
        },
        UpcomingClass {
            subject: "DBMS".to_string(),
            time: "Friday 1:00 PM".to_string(),
            room: "Room 12".to_string(),
        },
    ]
}

/// Load the classes taught by the demo teacher.
pub fn load_demo_classes() -> Vec<ClassRecord> {
    vec![
        ClassRecord {
            id: 1,
            name: "Class 10-A".to_string(),
            subject: "Mathematics".to_string(),
            section: "A".to_string(),
            total_students: 40,
            schedule: "Mon, Wed, Fri • 9:00 AM".to_string(),
            room: "Lab 5".to_string(),
            defaulter_count: 6,
            weekly_avg: 82,
        },
        ClassRecord {
            id: 2,
            name: "Class 10-B".to_string(),
            subject: "Physics".to_string(),
            section: "B".to_string(),
            total_students: 38,
            schedule: "Tue, Thu • 11:00 AM".to_string(),
            room: "Lab 3".to_string(),
            defaulter_count: 9,
            weekly_avg: 76,
        },
        ClassRecord {
            id: 3,
            name: "Class 9-A".to_string(),
            subject: "English".to_string(),
            section: "A".to_string(),
            total_students: 35,
            schedule: "Mon, Wed, Fri • 2:00 PM".to_string(),
            room: "Room 12".to_string(),
            defaulter_count: 4,
            weekly_avg: 88,
        },
    ]
}

/// Load the roster for a demo class. Unknown classes have no students.
pub fn load_demo_roster(class_id: ClassId) -> Vec<AttendanceEntry> {
    match class_id {
        1 => vec![
            AttendanceEntry::new(1, "Om Kane", "001", true, 89),
            AttendanceEntry::new(2, "Priya Singh", "002", true, 92),
            AttendanceEntry::new(3, "Raj Patel", "003", false, 68),
            AttendanceEntry::new(4, "Isha Sharma", "004", true, 84),
            AttendanceEntry::new(5, "Neha Gupta", "005", false, 71),
        ],
        2 => vec![
            AttendanceEntry::new(1, "Akshay Reddy", "001", true, 78),
            AttendanceEntry::new(2, "Diya Malhotra", "002", true, 81),
            AttendanceEntry::new(3, "Sarthak Jain", "003", false, 66),
        ],
        3 => vec![
            AttendanceEntry::new(1, "Kavya Sharma", "001", true, 93),
            AttendanceEntry::new(2, "Aditya Rao", "002", false, 72),
            AttendanceEntry::new(3, "Zara Khan", "003", true, 87),
        ],
        _ => Vec::new(),
    }
}
