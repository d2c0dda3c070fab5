use serde::Deserialize;
use ts_rs::TS;

use super::entities::Answer;
use crate::models::forms::FormType;

// 教师提交表单请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitFormRequest {
    // 被提交（获得积分）的学生 ID
    pub submitted_for: i64,
    pub answers: Vec<Answer>,
}

// 一次积分入账需要写入的全部内容（提交记录 + 余额增量 + 流水条目）。
// 存储层在单个事务内完成三者，保证余额与流水一致。
#[derive(Debug, Clone)]
pub struct PointAwardRecord {
    pub form_id: i64,
    pub teacher_id: i64,
    pub answers: Vec<Answer>,
    pub total_points: i64,
    pub form_type: FormType,
    pub form_name: String,
    pub teacher_name: String,
    pub student_id: i64,
    pub student_name: String,
    pub school_id: i64,
}
