use serde::Serialize;
use ts_rs::TS;

use crate::models::accounts::Account;

// 登录响应
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
    pub expires_in: i64,
    pub account: Account,
}

// 注册响应
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RegisterResponse {
    pub message: String,
    pub account: Account,
}

// 刷新令牌响应
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RefreshResponse {
    pub message: String,
    pub access_token: String,
    pub expires_in: i64,
}

// 当前账号响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct MeResponse {
    pub account: Account,
}
