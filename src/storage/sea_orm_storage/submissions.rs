use super::SeaOrmStorage;
use crate::entity::{form_submissions, points_history, students};
use crate::errors::{PointSystemError, Result};
use crate::models::{
    points::PointsHistory,
    submissions::{FormSubmission, requests::PointAwardRecord},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait,
    sea_query::{Expr, ExprTrait},
};

impl SeaOrmStorage {
    /// 积分入账
    ///
    /// 单个数据库事务内完成三步写入：
    /// 1. 插入表单提交记录（此后不可变）；
    /// 2. 学生余额原子自增 `points = points + delta`，并发提交可交换，
    ///    不存在读-改-写丢失更新；
    /// 3. 插入积分流水条目，引用新提交记录的 ID。
    /// 三者同失同成，余额与流水之和始终一致。
    pub async fn record_point_award_impl(
        &self,
        record: PointAwardRecord,
    ) -> Result<(FormSubmission, PointsHistory)> {
        let now = chrono::Utc::now().timestamp();
        let answers = serde_json::to_string(&record.answers)
            .map_err(|e| PointSystemError::serialization(format!("答案序列化失败: {e}")))?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PointSystemError::database_operation(format!("开启事务失败: {e}")))?;

        // 1. 提交记录
        let submission = form_submissions::ActiveModel {
            form_id: Set(record.form_id),
            teacher_id: Set(record.teacher_id),
            answers: Set(answers),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| PointSystemError::database_operation(format!("写入提交记录失败: {e}")))?;

        // 2. 余额原子自增
        let updated = students::Entity::update_many()
            .col_expr(
                students::Column::Points,
                Expr::col(students::Column::Points).add(record.total_points),
            )
            .col_expr(students::Column::UpdatedAt, Expr::value(now))
            .filter(students::Column::Id.eq(record.student_id))
            .exec(&txn)
            .await
            .map_err(|e| PointSystemError::database_operation(format!("更新学生余额失败: {e}")))?;

        if updated.rows_affected == 0 {
            txn.rollback()
                .await
                .map_err(|e| PointSystemError::database_operation(format!("回滚事务失败: {e}")))?;
            return Err(PointSystemError::not_found(format!(
                "学生 {} 不存在，积分入账中止",
                record.student_id
            )));
        }

        // 3. 流水条目
        let history = points_history::ActiveModel {
            form_id: Set(record.form_id),
            form_type: Set(record.form_type.to_string()),
            form_name: Set(record.form_name),
            form_submission_id: Set(submission.id),
            submitted_by_id: Set(record.teacher_id),
            submitted_by_name: Set(record.teacher_name),
            submitted_for_id: Set(record.student_id),
            submitted_for_name: Set(record.student_name),
            points: Set(record.total_points),
            school_id: Set(record.school_id),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| PointSystemError::database_operation(format!("写入积分流水失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| PointSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok((
            submission.into_form_submission(),
            history.into_points_history(),
        ))
    }
}
