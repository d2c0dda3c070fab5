use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 表单类型
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub enum FormType {
    AwardPoints,
    Feedback,
    PointWithdraw,
    DeductPoints,
}

impl FormType {
    pub const AWARD_POINTS: &'static str = "AwardPoints";
    pub const FEEDBACK: &'static str = "Feedback";
    pub const POINT_WITHDRAW: &'static str = "PointWithdraw";
    pub const DEDUCT_POINTS: &'static str = "DeductPoints";
}

impl<'de> Deserialize<'de> for FormType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            FormType::AWARD_POINTS => Ok(FormType::AwardPoints),
            FormType::FEEDBACK => Ok(FormType::Feedback),
            FormType::POINT_WITHDRAW => Ok(FormType::PointWithdraw),
            FormType::DEDUCT_POINTS => Ok(FormType::DeductPoints),
            _ => Err(serde::de::Error::custom(format!(
                "无效的表单类型: '{s}'. 支持: AwardPoints, Feedback, PointWithdraw, DeductPoints"
            ))),
        }
    }
}

impl std::fmt::Display for FormType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormType::AwardPoints => write!(f, "{}", FormType::AWARD_POINTS),
            FormType::Feedback => write!(f, "{}", FormType::FEEDBACK),
            FormType::PointWithdraw => write!(f, "{}", FormType::POINT_WITHDRAW),
            FormType::DeductPoints => write!(f, "{}", FormType::DEDUCT_POINTS),
        }
    }
}

impl std::str::FromStr for FormType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AwardPoints" => Ok(FormType::AwardPoints),
            "Feedback" => Ok(FormType::Feedback),
            "PointWithdraw" => Ok(FormType::PointWithdraw),
            "DeductPoints" => Ok(FormType::DeductPoints),
            _ => Err(format!("Invalid form type: {s}")),
        }
    }
}

// 表单问题（前端表单构建器产生，原样存储）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct Question {
    pub id: String,
    pub text: String,
    // 问题控件类型，如 "text" / "select"
    #[serde(rename = "type")]
    pub question_type: String,
    pub is_compulsory: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

// 表单实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct Form {
    pub id: i64,
    pub school_id: i64,
    pub form_name: String,
    pub form_type: FormType,
    pub questions: Vec<Question>,
    // 四个通知开关，彼此独立
    pub student_email: bool,
    pub teacher_email: bool,
    pub school_admin_email: bool,
    pub parent_email: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&FormType::AwardPoints).unwrap(),
            "\"AwardPoints\""
        );
        let parsed: FormType = serde_json::from_str("\"PointWithdraw\"").unwrap();
        assert_eq!(parsed, FormType::PointWithdraw);
    }

    #[test]
    fn test_unknown_form_type_rejected() {
        assert!(serde_json::from_str::<FormType>("\"BonusPoints\"").is_err());
    }

    #[test]
    fn test_question_wire_shape() {
        let json = r#"{"id":"q1","text":"Goal met?","type":"select","isCompulsory":true,"options":["yes","no"]}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.question_type, "select");
        assert!(q.is_compulsory);
        let back = serde_json::to_value(&q).unwrap();
        assert_eq!(back["type"], "select");
        assert_eq!(back["isCompulsory"], true);
    }
}
