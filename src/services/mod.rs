pub mod auth;
pub mod forms;
pub mod identity;
pub mod points;
pub mod schools;
pub mod students;
pub mod submissions;
pub mod teachers;

pub use auth::AuthService;
pub use forms::FormService;
pub use points::PointsService;
pub use schools::SchoolService;
pub use students::StudentService;
pub use submissions::SubmissionService;
pub use teachers::TeacherService;
