//! 角色解析器
//!
//! 把封闭角色集合 {school_admin, teacher, student} 中的 (role, id)
//! 解析为统一的账号档案；集合之外的角色在反序列化与 JWT 中间件处
//! 即被拒绝，不会到达这里。

pub mod resolve;

pub use resolve::{resolve_account, resolve_account_by_email};
