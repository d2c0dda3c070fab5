use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::forms::FormType;

// 积分流水条目
//
// 只增不改；学生的 points 余额是该流水按学生求和的缓存投影。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/points.ts")]
pub struct PointsHistory {
    pub id: i64,
    pub form_id: i64,
    pub form_type: FormType,
    pub form_name: String,
    pub form_submission_id: i64,
    pub submitted_by_id: i64,
    pub submitted_by_name: String,
    pub submitted_for_id: i64,
    pub submitted_for_name: String,
    // 带符号的积分合计，符号约定由表单类型语义决定
    pub points: i64,
    pub school_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
