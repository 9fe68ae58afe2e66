//! Core types for the PresenX attendance client.
//!
//! This crate defines the shared data structures used across the
//! auth flows, the dashboards, and the browser frontend. Nothing in
//! here touches the network or the browser.

pub mod attendance;
pub mod demo;

use serde::{Deserialize, Serialize};

pub use attendance::{AttendanceBook, AttendanceStats, ToggleState};

/// Identifier of a class in the teacher dashboard.
pub type ClassId = u32;

/// Identifier of a student within a class roster.
pub type StudentId = u32;

/// Attendance percentage below which a student counts as a defaulter.
pub const DEFAULTER_THRESHOLD: f64 = 75.0;

/// Percentage at which attendance is considered healthy.
pub const HEALTHY_THRESHOLD: f64 = 85.0;

/// Role returned by the authentication service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    /// Roles a user may pick when registering.
    pub const SELECTABLE: [Role; 2] = [Role::Student, Role::Teacher];

    /// Parse a role from its wire representation.
    ///
    /// Matching is exact: the service sends lowercase role names and
    /// anything else is treated as unknown.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Role::Student),
            "teacher" => Some(Role::Teacher),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Wire representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }

    /// Human readable label for forms.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Admin => "Admin",
        }
    }

    /// Dashboard a user with this role lands on after login.
    pub fn dashboard(&self) -> Destination {
        match self {
            Role::Student => Destination::StudentDashboard,
            Role::Teacher | Role::Admin => Destination::TeacherDashboard,
        }
    }
}

/// Client-side navigation target produced by the auth flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Landing,
    Login,
    Register,
    StudentDashboard,
    TeacherDashboard,
}

impl Destination {
    /// Route path for this destination.
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Landing => "/",
            Destination::Login => "/login",
            Destination::Register => "/register",
            Destination::StudentDashboard => "/student/dashboard",
            Destination::TeacherDashboard => "/teacher/dashboard",
        }
    }
}

/// Severity bucket for an attendance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Below the defaulter threshold (red)
    Low,
    /// At or above the threshold but not yet healthy (yellow)
    Medium,
    /// Healthy attendance (green)
    High,
}

impl Severity {
    /// Classify an attendance percentage.
    ///
    /// Boundaries are inclusive on the upper bucket: exactly 75 is
    /// `Medium` and exactly 85 is `High`. NaN is not a valid percentage
    /// and is classified `Low`.
    pub fn classify(percentage: f64) -> Self {
        if percentage.is_nan() || percentage < DEFAULTER_THRESHOLD {
            Severity::Low
        } else if percentage < HEALTHY_THRESHOLD {
            Severity::Medium
        } else {
            Severity::High
        }
    }

    /// CSS class used to colour badges of this severity.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Low => "severity-low",
            Severity::Medium => "severity-medium",
            Severity::High => "severity-high",
        }
    }
}

/// Whether a percentage falls below the defaulter threshold.
pub fn is_defaulter(percentage: f64) -> bool {
    percentage < DEFAULTER_THRESHOLD
}

/// Attendance status of a single past session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

/// Profile shown on the student dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Display name
    pub name: String,
    /// Institution roll number
    pub roll_no: String,
    /// Overall attendance percentage
    pub overall_attendance: u8,
    /// Defaulter status as reported by the institution
    pub defaulter_status: String,
    /// Reward points earned for attendance
    pub reward_points: u32,
    /// Consecutive days attended
    pub streak_days: u32,
    /// Avatar initials
    pub avatar: String,
    /// Attendance percentage for each of the last seven days
    pub trend: Vec<u8>,
}

/// Per-subject attendance for the student dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectAttendance {
    pub name: String,
    pub code: String,
    pub attendance: u8,
}

/// A recently recorded session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub subject: String,
    pub date: String,
    pub time: String,
    pub status: AttendanceStatus,
}

/// A scheduled class the student will attend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingClass {
    pub subject: String,
    pub time: String,
    pub room: String,
}

/// A class taught by the signed-in teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Unique class identifier
    pub id: ClassId,
    /// Display name, e.g. "Class 10-A"
    pub name: String,
    /// Subject taught
    pub subject: String,
    /// Section letter
    pub section: String,
    /// Enrolled students
    pub total_students: u32,
    /// Human readable weekly schedule
    pub schedule: String,
    /// Room or lab
    pub room: String,
    /// Number of students below the defaulter threshold
    pub defaulter_count: u32,
    /// Average attendance over the last week
    pub weekly_avg: u8,
}

/// A roster row for a class.
///
/// `present` is the seed value for the toggle map; toggling never
/// changes the entry itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub id: StudentId,
    pub name: String,
    pub roll_no: String,
    pub present: bool,
    /// Historic attendance percentage
    pub percentage: u8,
}

impl AttendanceEntry {
    /// Create a new roster entry.
    pub fn new(id: StudentId, name: &str, roll_no: &str, present: bool, percentage: u8) -> Self {
        Self {
            id,
            name: name.to_string(),
            roll_no: roll_no.to_string(),
            present,
            percentage,
        }
    }
}
