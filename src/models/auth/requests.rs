use serde::Deserialize;
use ts_rs::TS;

use crate::models::accounts::Role;

// 登录请求：按角色分派到对应的档案表
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default)]
    pub remember_me: bool,
}

// 管理员注册请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}
