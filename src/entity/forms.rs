//! 表单实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "forms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub school_id: i64,
    pub form_name: String,
    pub form_type: String,
    // 问题序列，JSON 文本存储
    #[sea_orm(column_type = "Text")]
    pub questions: String,
    pub student_email: bool,
    pub teacher_email: bool,
    pub school_admin_email: bool,
    pub parent_email: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::schools::Entity",
        from = "Column::SchoolId",
        to = "super::schools::Column::Id"
    )]
    School,
    #[sea_orm(has_many = "super::form_submissions::Entity")]
    FormSubmissions,
}

impl Related<super::schools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::School.def()
    }
}

impl Related<super::form_submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormSubmissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_form(self) -> crate::models::forms::Form {
        use crate::models::forms::{Form, FormType};
        use chrono::{DateTime, Utc};

        Form {
            id: self.id,
            school_id: self.school_id,
            form_name: self.form_name,
            form_type: self
                .form_type
                .parse::<FormType>()
                .unwrap_or(FormType::AwardPoints),
            questions: serde_json::from_str(&self.questions).unwrap_or_default(),
            student_email: self.student_email,
            teacher_email: self.teacher_email,
            school_admin_email: self.school_admin_email,
            parent_email: self.parent_email,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
