use std::time::Duration;

use futures_util::future::join_all;
use tracing::{info, warn};

use super::mailer::{EmailAttachment, Mailer};
use super::message::AwardMessage;
use crate::models::accounts::Account;
use crate::models::forms::Form;
use crate::models::students::Student;
use crate::models::submissions::responses::{NotificationChannel, NotificationOutcome};
use crate::models::teachers::Teacher;

/// 一条待发送的通知（条件已判定，收件人已解析）
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedNotification {
    pub channel: NotificationChannel,
    pub recipient: String,
}

/// 根据表单开关与收件人状态生成通知计划
///
/// 五个方向统一按 (开关, 收件地址) 判定，互不影响：
/// - 教师：表单开关 + 教师本人的 receive_mails
/// - 学生：仅表单开关
/// - 管理员：仅表单开关
/// - 家长：表单开关 + 学生 send_notifications + parent_email 非空
/// - 第二家长地址：表单开关 + 学生 send_notifications + standard 非空
///   （standard 字段在此作为第二家长联系邮箱使用）
pub fn build_fanout_plan(
    form: &Form,
    teacher: &Teacher,
    student: &Student,
    school_admin: &Account,
) -> Vec<PlannedNotification> {
    let candidates = [
        (
            form.teacher_email && teacher.receive_mails,
            Some(teacher.email.clone()),
            NotificationChannel::Teacher,
        ),
        (
            form.student_email,
            Some(student.email.clone()),
            NotificationChannel::Student,
        ),
        (
            form.school_admin_email,
            Some(school_admin.email.clone()),
            NotificationChannel::SchoolAdmin,
        ),
        (
            form.parent_email && student.send_notifications,
            student.parent_email.clone(),
            NotificationChannel::Parent,
        ),
        (
            form.parent_email && student.send_notifications,
            student.standard.clone(),
            NotificationChannel::ParentSecondary,
        ),
    ];

    candidates
        .into_iter()
        .filter_map(|(enabled, recipient, channel)| match recipient {
            Some(recipient) if enabled && !recipient.is_empty() => Some(PlannedNotification {
                channel,
                recipient,
            }),
            _ => None,
        })
        .collect()
}

/// 并发执行通知计划，逐一记录结果
///
/// 每路发送独立：单路失败或超时不影响其余收件人，调用方
/// 在此之前已完成全部持久化写入，这里绝不回滚。
pub async fn dispatch_notifications(
    mailer: Option<&Mailer>,
    plan: Vec<PlannedNotification>,
    message: &AwardMessage,
    attachment: Option<&EmailAttachment>,
    send_timeout: Duration,
) -> Vec<NotificationOutcome> {
    let Some(mailer) = mailer else {
        // 未配置 SMTP：全部按失败记录，便于调用方察觉
        return plan
            .into_iter()
            .map(|p| {
                NotificationOutcome::failed(p.channel, p.recipient, "SMTP is not configured")
            })
            .collect();
    };

    let sends = plan.into_iter().map(|planned| async move {
        let result = tokio::time::timeout(
            send_timeout,
            mailer.send(
                &planned.recipient,
                &message.subject,
                &message.html,
                &message.text,
                attachment,
            ),
        )
        .await;

        match result {
            Ok(Ok(())) => {
                info!(
                    recipient = %planned.recipient,
                    channel = ?planned.channel,
                    "Award notification delivered"
                );
                NotificationOutcome::delivered(planned.channel, planned.recipient)
            }
            Ok(Err(e)) => {
                warn!(
                    recipient = %planned.recipient,
                    channel = ?planned.channel,
                    "Award notification failed: {e}"
                );
                NotificationOutcome::failed(planned.channel, planned.recipient, e)
            }
            Err(_) => {
                warn!(
                    recipient = %planned.recipient,
                    channel = ?planned.channel,
                    "Award notification timed out"
                );
                NotificationOutcome::failed(planned.channel, planned.recipient, "send timed out")
            }
        }
    });

    join_all(sends).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::accounts::Role;
    use crate::models::forms::FormType;

    fn form(student: bool, teacher: bool, admin: bool, parent: bool) -> Form {
        Form {
            id: 1,
            school_id: 1,
            form_name: "Daily Goals".to_string(),
            form_type: FormType::AwardPoints,
            questions: vec![],
            student_email: student,
            teacher_email: teacher,
            school_admin_email: admin,
            parent_email: parent,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn teacher(receive_mails: bool) -> Teacher {
        Teacher {
            id: 10,
            name: "Mr. Brown".to_string(),
            email: "brown@school.test".to_string(),
            password_hash: String::new(),
            subject: Some("Math".to_string()),
            receive_mails,
            school_id: 1,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn student(
        parent_email: Option<&str>,
        standard: Option<&str>,
        send_notifications: bool,
    ) -> Student {
        Student {
            id: 20,
            name: "Alice".to_string(),
            email: "alice@school.test".to_string(),
            password_hash: String::new(),
            parent_email: parent_email.map(str::to_string),
            standard: standard.map(str::to_string),
            points: 10,
            send_notifications,
            school_id: 1,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn admin() -> Account {
        Account {
            id: 30,
            role: Role::SchoolAdmin,
            name: "Principal".to_string(),
            email: "principal@school.test".to_string(),
            password_hash: String::new(),
            school_id: Some(1),
        }
    }

    fn channels(plan: &[PlannedNotification]) -> Vec<NotificationChannel> {
        plan.iter().map(|p| p.channel).collect()
    }

    #[test]
    fn test_all_flags_on_yields_five_recipients() {
        let plan = build_fanout_plan(
            &form(true, true, true, true),
            &teacher(true),
            &student(Some("p@x.com"), Some("p2@x.com"), true),
            &admin(),
        );
        assert_eq!(plan.len(), 5);
        assert_eq!(
            channels(&plan),
            vec![
                NotificationChannel::Teacher,
                NotificationChannel::Student,
                NotificationChannel::SchoolAdmin,
                NotificationChannel::Parent,
                NotificationChannel::ParentSecondary,
            ]
        );
    }

    #[test]
    fn test_each_flag_suppresses_exactly_its_channel() {
        let full_student = student(Some("p@x.com"), Some("p2@x.com"), true);
        let cases = [
            (
                form(false, true, true, true),
                vec![
                    NotificationChannel::Teacher,
                    NotificationChannel::SchoolAdmin,
                    NotificationChannel::Parent,
                    NotificationChannel::ParentSecondary,
                ],
            ),
            (
                form(true, false, true, true),
                vec![
                    NotificationChannel::Student,
                    NotificationChannel::SchoolAdmin,
                    NotificationChannel::Parent,
                    NotificationChannel::ParentSecondary,
                ],
            ),
            (
                form(true, true, false, true),
                vec![
                    NotificationChannel::Teacher,
                    NotificationChannel::Student,
                    NotificationChannel::Parent,
                    NotificationChannel::ParentSecondary,
                ],
            ),
            (
                form(true, true, true, false),
                vec![
                    NotificationChannel::Teacher,
                    NotificationChannel::Student,
                    NotificationChannel::SchoolAdmin,
                ],
            ),
        ];

        for (f, expected) in cases {
            let plan = build_fanout_plan(&f, &teacher(true), &full_student, &admin());
            assert_eq!(channels(&plan), expected);
        }
    }

    #[test]
    fn test_teacher_opt_out_suppresses_only_teacher() {
        let plan = build_fanout_plan(
            &form(true, true, true, true),
            &teacher(false),
            &student(Some("p@x.com"), Some("p2@x.com"), true),
            &admin(),
        );
        assert!(!channels(&plan).contains(&NotificationChannel::Teacher));
        assert_eq!(plan.len(), 4);
    }

    #[test]
    fn test_student_opt_out_suppresses_both_parent_channels() {
        let plan = build_fanout_plan(
            &form(true, true, true, true),
            &teacher(true),
            &student(Some("p@x.com"), Some("p2@x.com"), false),
            &admin(),
        );
        assert_eq!(
            channels(&plan),
            vec![
                NotificationChannel::Teacher,
                NotificationChannel::Student,
                NotificationChannel::SchoolAdmin,
            ]
        );
    }

    #[test]
    fn test_missing_or_empty_addresses_skip_parent_channels() {
        let plan = build_fanout_plan(
            &form(false, false, false, true),
            &teacher(true),
            &student(None, Some(""), true),
            &admin(),
        );
        assert!(plan.is_empty());
    }

    #[test]
    fn test_standard_field_reused_as_second_parent_address() {
        let plan = build_fanout_plan(
            &form(false, false, false, true),
            &teacher(true),
            &student(None, Some("grandma@x.com"), true),
            &admin(),
        );
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].channel, NotificationChannel::ParentSecondary);
        assert_eq!(plan[0].recipient, "grandma@x.com");
    }

    // 表单开 studentEmail + parentEmail，学生带家长邮箱且允许通知
    // 时，恰好两路收件人：学生与家长
    #[test]
    fn test_award_scenario_student_and_parent() {
        let plan = build_fanout_plan(
            &form(true, false, false, true),
            &teacher(true),
            &student(Some("p@x.com"), None, true),
            &admin(),
        );
        assert_eq!(
            channels(&plan),
            vec![NotificationChannel::Student, NotificationChannel::Parent]
        );
    }

    #[tokio::test]
    async fn test_dispatch_without_mailer_reports_failures_for_all() {
        let plan = build_fanout_plan(
            &form(true, true, true, true),
            &teacher(true),
            &student(Some("p@x.com"), Some("p2@x.com"), true),
            &admin(),
        );
        let message = AwardMessage {
            subject: "s".to_string(),
            html: "h".to_string(),
            text: "t".to_string(),
        };

        let outcomes =
            dispatch_notifications(None, plan, &message, None, Duration::from_secs(1)).await;

        assert_eq!(outcomes.len(), 5);
        assert!(outcomes.iter().all(|o| !o.delivered));
        assert!(outcomes.iter().all(|o| o.error.is_some()));
    }
}
