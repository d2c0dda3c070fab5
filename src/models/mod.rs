pub mod accounts;
pub mod auth;
pub mod common;
pub mod forms;
pub mod points;
pub mod schools;
pub mod students;
pub mod submissions;
pub mod teachers;

pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ErrorResponse;

// 程序启动时间，用于统计预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
