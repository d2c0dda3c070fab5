use serde::Serialize;
use ts_rs::TS;

use super::entities::Form;

// 创建/编辑表单响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct FormResponse {
    pub message: String,
    pub form: Form,
}

// 表单列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct FormListResponse {
    pub message: String,
    pub forms: Vec<Form>,
}

// 按 ID 查询表单响应（不存在时 form 为 null）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct FormDetailResponse {
    pub form: Option<Form>,
}

// 删除表单响应
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct DeleteFormResponse {
    pub form_name: String,
}
