use serde::Deserialize;
use ts_rs::TS;

use super::entities::{FormType, Question};

// 创建/编辑表单请求（编辑为全字段替换，不做合并）
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct FormPayload {
    pub form_name: String,
    pub form_type: FormType,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub student_email: bool,
    #[serde(default)]
    pub teacher_email: bool,
    #[serde(default)]
    pub school_admin_email: bool,
    #[serde(default)]
    pub parent_email: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_flags_default_false() {
        let json = r#"{"formName":"Daily Goals","formType":"AwardPoints","questions":[]}"#;
        let payload: FormPayload = serde_json::from_str(json).unwrap();
        assert!(!payload.student_email);
        assert!(!payload.teacher_email);
        assert!(!payload.school_admin_email);
        assert!(!payload.parent_email);
    }
}
