pub use super::admins::Entity as Admins;
pub use super::form_submissions::Entity as FormSubmissions;
pub use super::forms::Entity as Forms;
pub use super::points_history::Entity as PointsHistory;
pub use super::schools::Entity as Schools;
pub use super::students::Entity as Students;
pub use super::teachers::Entity as Teachers;
