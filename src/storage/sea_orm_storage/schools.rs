use super::SeaOrmStorage;
use crate::entity::schools::{ActiveModel, Column, Entity as Schools};
use crate::errors::{PointSystemError, Result};
use crate::models::schools::{
    School,
    requests::{CreateSchoolRequest, UpdateSchoolRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建学校
    pub async fn create_school_impl(
        &self,
        admin_id: i64,
        req: CreateSchoolRequest,
    ) -> Result<School> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            address: Set(req.address),
            logo_url: Set(req.logo_url),
            created_by: Set(admin_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PointSystemError::database_operation(format!("创建学校失败: {e}")))?;

        Ok(result.into_school())
    }

    /// 通过 ID 获取学校
    pub async fn get_school_by_id_impl(&self, id: i64) -> Result<Option<School>> {
        let result = Schools::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PointSystemError::database_operation(format!("查询学校失败: {e}")))?;

        Ok(result.map(|m| m.into_school()))
    }

    /// 获取管理员名下的学校
    pub async fn get_school_by_admin_impl(&self, admin_id: i64) -> Result<Option<School>> {
        let result = Schools::find()
            .filter(Column::CreatedBy.eq(admin_id))
            .one(&self.db)
            .await
            .map_err(|e| PointSystemError::database_operation(format!("查询学校失败: {e}")))?;

        Ok(result.map(|m| m.into_school()))
    }

    /// 更新学校信息
    pub async fn update_school_impl(
        &self,
        id: i64,
        update: UpdateSchoolRequest,
    ) -> Result<Option<School>> {
        // 先检查学校是否存在
        let existing = self.get_school_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(address) = update.address {
            model.address = Set(Some(address));
        }

        if let Some(logo_url) = update.logo_url {
            model.logo_url = Set(Some(logo_url));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| PointSystemError::database_operation(format!("更新学校失败: {e}")))?;

        self.get_school_by_id_impl(id).await
    }
}
