use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::PaginationQuery;

// 创建学生请求（points 不可指定，余额恒从 0 开始）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub parent_email: Option<String>,
    pub standard: Option<String>,
    #[serde(default = "default_true")]
    pub send_notifications: bool,
}

// 更新学生请求（points 不在可更新字段之列）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub parent_email: Option<String>,
    pub standard: Option<String>,
    pub send_notifications: Option<bool>,
}

// 学生列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

fn default_true() -> bool {
    true
}
