use serde::Serialize;
use ts_rs::TS;

use super::entities::School;

// 学校创建/查询/更新响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school.ts")]
pub struct SchoolResponse {
    pub message: String,
    pub school: School,
}
