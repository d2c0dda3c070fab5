//! 积分流水实体（只增不改）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "points_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub form_id: i64,
    pub form_type: String,
    pub form_name: String,
    pub form_submission_id: i64,
    pub submitted_by_id: i64,
    pub submitted_by_name: String,
    pub submitted_for_id: i64,
    pub submitted_for_name: String,
    pub points: i64,
    pub school_id: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::form_submissions::Entity",
        from = "Column::FormSubmissionId",
        to = "super::form_submissions::Column::Id"
    )]
    FormSubmission,
}

impl Related<super::form_submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormSubmission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_points_history(self) -> crate::models::points::PointsHistory {
        use crate::models::forms::FormType;
        use chrono::{DateTime, Utc};

        crate::models::points::PointsHistory {
            id: self.id,
            form_id: self.form_id,
            form_type: self
                .form_type
                .parse::<FormType>()
                .unwrap_or(FormType::AwardPoints),
            form_name: self.form_name,
            form_submission_id: self.form_submission_id,
            submitted_by_id: self.submitted_by_id,
            submitted_by_name: self.submitted_by_name,
            submitted_for_id: self.submitted_for_id,
            submitted_for_name: self.submitted_for_name,
            points: self.points,
            school_id: self.school_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
