use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 账号角色（封闭集合，其余一律拒绝）
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub enum Role {
    SchoolAdmin, // 学校管理员
    Teacher,     // 教师
    Student,     // 学生
}

impl Role {
    pub const SCHOOL_ADMIN: &'static str = "school_admin";
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";

    pub fn admin_roles() -> &'static [&'static Role] {
        &[&Self::SchoolAdmin]
    }
    pub fn teacher_roles() -> &'static [&'static Role] {
        &[&Self::Teacher]
    }
    // 管理员与教师（积分流水、学生管理）
    pub fn staff_roles() -> &'static [&'static Role] {
        &[&Self::SchoolAdmin, &Self::Teacher]
    }
    pub fn all_roles() -> &'static [&'static Role] {
        &[&Self::SchoolAdmin, &Self::Teacher, &Self::Student]
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            Role::SCHOOL_ADMIN => Ok(Role::SchoolAdmin),
            Role::TEACHER => Ok(Role::Teacher),
            Role::STUDENT => Ok(Role::Student),
            _ => Err(serde::de::Error::custom(format!(
                "无效的账号角色: '{s}'. 支持的角色: school_admin, teacher, student"
            ))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::SchoolAdmin => write!(f, "{}", Role::SCHOOL_ADMIN),
            Role::Teacher => write!(f, "{}", Role::TEACHER),
            Role::Student => write!(f, "{}", Role::STUDENT),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "school_admin" => Ok(Role::SchoolAdmin),
            "teacher" => Ok(Role::Teacher),
            "student" => Ok(Role::Student),
            _ => Err(format!("Invalid account role: {s}")),
        }
    }
}

// 统一的账号档案
//
// 角色解析器把 (role, id) 解析为该结构，三种角色共用同一形状；
// school_id 为空表示管理员尚未创建学校。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub struct Account {
    pub id: i64,
    pub role: Role,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub school_id: Option<i64>,
}

impl Account {
    // 生成访问令牌（JWT）
    pub fn generate_access_token(&self) -> Result<String, jsonwebtoken::errors::Error> {
        crate::utils::jwt::JwtUtils::generate_access_token(self.id, &self.role.to_string())
    }

    // 生成 token 对（access + refresh）
    pub fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, jsonwebtoken::errors::Error> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            &self.role.to_string(),
            refresh_token_expiry,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in Role::all_roles() {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(&&parsed, role);
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        let result = serde_json::from_str::<Role>("\"principal\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_staff_roles_exclude_student() {
        assert!(!Role::staff_roles().contains(&&Role::Student));
        assert!(Role::all_roles().contains(&&Role::Student));
    }

    #[test]
    fn test_account_hides_password_hash() {
        let account = Account {
            id: 1,
            role: Role::Teacher,
            name: "T. Chen".to_string(),
            email: "t@example.com".to_string(),
            password_hash: "secret".to_string(),
            school_id: Some(7),
        };
        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["schoolId"], 7);
    }
}
