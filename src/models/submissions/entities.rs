use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 单题答案
//
// value 原样保留前端提交的内容（文本或选项），points 参与积分合计。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Answer {
    pub question_id: String,
    #[serde(default)]
    #[ts(type = "unknown")]
    pub value: serde_json::Value,
    #[serde(default)]
    pub points: i64,
}

// 表单提交实体，创建后不可变
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct FormSubmission {
    pub id: i64,
    pub form_id: i64,
    pub teacher_id: i64,
    pub answers: Vec<Answer>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 计算一次提交的积分合计（空答卷合计为 0）
pub fn total_points(answers: &[Answer]) -> i64 {
    answers.iter().map(|a| a.points).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(points: i64) -> Answer {
        Answer {
            question_id: "q".to_string(),
            value: serde_json::Value::Null,
            points,
        }
    }

    #[test]
    fn test_total_points_sums_all_entries() {
        let answers = vec![answer(5), answer(3), answer(-2)];
        assert_eq!(total_points(&answers), 6);
    }

    #[test]
    fn test_total_points_empty_is_zero() {
        assert_eq!(total_points(&[]), 0);
    }

    #[test]
    fn test_answer_missing_points_defaults_to_zero() {
        let a: Answer = serde_json::from_str(r#"{"questionId":"q1","value":"done"}"#).unwrap();
        assert_eq!(a.points, 0);
        assert_eq!(a.value, serde_json::json!("done"));
    }
}
