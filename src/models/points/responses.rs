use serde::Serialize;
use ts_rs::TS;

use super::entities::PointsHistory;

// 积分流水查询响应
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/points.ts")]
pub struct PointHistoryResponse {
    pub point_history: Vec<PointsHistory>,
}
