use super::SeaOrmStorage;
use crate::entity::forms::{ActiveModel, Column, Entity as Forms};
use crate::errors::{PointSystemError, Result};
use crate::models::forms::{Form, requests::FormPayload};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建表单
    pub async fn create_form_impl(&self, school_id: i64, payload: FormPayload) -> Result<Form> {
        let now = chrono::Utc::now().timestamp();
        let questions = serde_json::to_string(&payload.questions)
            .map_err(|e| PointSystemError::serialization(format!("问题序列化失败: {e}")))?;

        let model = ActiveModel {
            school_id: Set(school_id),
            form_name: Set(payload.form_name),
            form_type: Set(payload.form_type.to_string()),
            questions: Set(questions),
            student_email: Set(payload.student_email),
            teacher_email: Set(payload.teacher_email),
            school_admin_email: Set(payload.school_admin_email),
            parent_email: Set(payload.parent_email),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PointSystemError::database_operation(format!("创建表单失败: {e}")))?;

        Ok(result.into_form())
    }

    /// 通过 ID 获取表单
    pub async fn get_form_by_id_impl(&self, id: i64) -> Result<Option<Form>> {
        let result = Forms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PointSystemError::database_operation(format!("查询表单失败: {e}")))?;

        Ok(result.map(|m| m.into_form()))
    }

    /// 编辑表单（全字段替换，不做合并）
    pub async fn update_form_impl(&self, id: i64, payload: FormPayload) -> Result<Option<Form>> {
        // 先检查表单是否存在
        let existing = self.get_form_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();
        let questions = serde_json::to_string(&payload.questions)
            .map_err(|e| PointSystemError::serialization(format!("问题序列化失败: {e}")))?;

        let model = ActiveModel {
            id: Set(id),
            form_name: Set(payload.form_name),
            form_type: Set(payload.form_type.to_string()),
            questions: Set(questions),
            student_email: Set(payload.student_email),
            teacher_email: Set(payload.teacher_email),
            school_admin_email: Set(payload.school_admin_email),
            parent_email: Set(payload.parent_email),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| PointSystemError::database_operation(format!("更新表单失败: {e}")))?;

        self.get_form_by_id_impl(id).await
    }

    /// 删除表单，返回被删除的表单（不存在时返回 None）
    pub async fn delete_form_impl(&self, id: i64) -> Result<Option<Form>> {
        let existing = Forms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PointSystemError::database_operation(format!("查询表单失败: {e}")))?;

        let Some(model) = existing else {
            return Ok(None);
        };

        let form = model.clone().into_form();
        model
            .delete(&self.db)
            .await
            .map_err(|e| PointSystemError::database_operation(format!("删除表单失败: {e}")))?;

        Ok(Some(form))
    }

    /// 列出学校的所有表单
    pub async fn list_forms_by_school_impl(&self, school_id: i64) -> Result<Vec<Form>> {
        let results = Forms::find()
            .filter(Column::SchoolId.eq(school_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| PointSystemError::database_operation(format!("查询表单列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_form()).collect())
    }
}
