use std::sync::Arc;

use crate::errors::Result;
use crate::models::accounts::{Account, Role};
use crate::models::students::Student;
use crate::models::teachers::Teacher;
use crate::storage::Storage;

fn teacher_to_account(teacher: Teacher) -> Account {
    Account {
        id: teacher.id,
        role: Role::Teacher,
        name: teacher.name,
        email: teacher.email,
        password_hash: teacher.password_hash,
        school_id: Some(teacher.school_id),
    }
}

fn student_to_account(student: Student) -> Account {
    Account {
        id: student.id,
        role: Role::Student,
        name: student.name,
        email: student.email,
        password_hash: student.password_hash,
        school_id: Some(student.school_id),
    }
}

/// 按 (role, id) 解析账号档案
pub async fn resolve_account(
    storage: &Arc<dyn Storage>,
    role: &Role,
    id: i64,
) -> Result<Option<Account>> {
    match role {
        Role::SchoolAdmin => storage.get_admin_by_id(id).await,
        Role::Teacher => Ok(storage
            .get_teacher_by_id(id)
            .await?
            .map(teacher_to_account)),
        Role::Student => Ok(storage
            .get_student_by_id(id)
            .await?
            .map(student_to_account)),
    }
}

/// 按 (role, email) 解析账号档案（登录用）
pub async fn resolve_account_by_email(
    storage: &Arc<dyn Storage>,
    role: &Role,
    email: &str,
) -> Result<Option<Account>> {
    match role {
        Role::SchoolAdmin => storage.get_admin_by_email(email).await,
        Role::Teacher => Ok(storage
            .get_teacher_by_email(email)
            .await?
            .map(teacher_to_account)),
        Role::Student => Ok(storage
            .get_student_by_email(email)
            .await?
            .map(student_to_account)),
    }
}
