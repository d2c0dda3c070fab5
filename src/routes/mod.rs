pub mod auth;

pub mod forms;

pub mod points_history;

pub mod schools;

pub mod students;

pub mod teachers;

pub use auth::configure_auth_routes;
pub use forms::configure_forms_routes;
pub use points_history::configure_points_history_routes;
pub use schools::configure_schools_routes;
pub use students::configure_students_routes;
pub use teachers::configure_teachers_routes;
