//! Page components.

mod landing;
mod login;
mod register;
mod student_dashboard;
mod teacher_dashboard;

pub use landing::LandingPage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use student_dashboard::StudentDashboardPage;
pub use teacher_dashboard::TeacherDashboardPage;
