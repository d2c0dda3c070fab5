use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::FormSubmission;

// 通知渠道（五个独立的收件方向）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum NotificationChannel {
    Student,
    Teacher,
    SchoolAdmin,
    Parent,
    // student.standard 中保存的第二家长联系地址
    ParentSecondary,
}

// 单个收件人的发送结果
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct NotificationOutcome {
    pub channel: NotificationChannel,
    pub recipient: String,
    pub delivered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NotificationOutcome {
    pub fn delivered(channel: NotificationChannel, recipient: impl Into<String>) -> Self {
        Self {
            channel,
            recipient: recipient.into(),
            delivered: true,
            error: None,
        }
    }

    pub fn failed(
        channel: NotificationChannel,
        recipient: impl Into<String>,
        error: impl ToString,
    ) -> Self {
        Self {
            channel,
            recipient: recipient.into(),
            delivered: false,
            error: Some(error.to_string()),
        }
    }
}

// 表单提交响应：提交记录 + 每个收件人的发送结果
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitFormResponse {
    pub message: String,
    pub form_submission: FormSubmission,
    pub notifications: Vec<NotificationOutcome>,
}
