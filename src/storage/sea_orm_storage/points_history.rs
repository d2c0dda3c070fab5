use super::SeaOrmStorage;
use crate::entity::points_history::{Column, Entity as PointsHistoryEntity};
use crate::errors::{PointSystemError, Result};
use crate::models::points::PointsHistory;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 列出学校的全部积分流水（按时间倒序，不分页）
    pub async fn list_points_history_by_school_impl(
        &self,
        school_id: i64,
    ) -> Result<Vec<PointsHistory>> {
        let results = PointsHistoryEntity::find()
            .filter(Column::SchoolId.eq(school_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| PointSystemError::database_operation(format!("查询积分流水失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_points_history()).collect())
    }
}
