use crate::models::accounts::Account;
use crate::models::schools::School;
use crate::models::students::Student;
use crate::models::teachers::Teacher;

/// 一次积分通知的完整文案（主题 + html + 纯文本）
#[derive(Debug, Clone)]
pub struct AwardMessage {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// 生成积分到账通知文案
pub fn build_award_message(
    total_points: i64,
    student: &Student,
    teacher: &Teacher,
    school_admin: &Account,
    school: &School,
) -> AwardMessage {
    let subject = format!("GOOD NEWS, YOU EARNED {total_points} E-TOKENS!");
    let teacher_subject = teacher.subject.as_deref().unwrap_or("General");

    let html = format!(
        r#"
<p>Congratulations <strong>{student_name}</strong>!</p>
<p>The <strong>{teacher_subject}</strong> teacher, <strong>{teacher_name}</strong>, has just awarded you with <strong>{total_points} E-Tokens</strong> for achieving your goals today.</p>
<p>Please, check your E-Token's balance and exchange them at the AN Center or school store.</p>
<p>Keep up the good work!!!</p>
<p>
  {admin_name}<br>
  {admin_email}<br>
  Affective Needs Special Education Teacher<br>
  {school_name}
</p>
"#,
        student_name = student.name,
        teacher_subject = teacher_subject,
        teacher_name = teacher.name,
        total_points = total_points,
        admin_name = school_admin.name,
        admin_email = school_admin.email,
        school_name = school.name,
    );

    let text = format!(
        "Congratulations {student_name}!\n\
         The {teacher_subject} teacher, {teacher_name}, has just awarded you with {total_points} E-Tokens for achieving your goals today.\n\
         Please, check your E-Token's balance and exchange them at the AN Center or school store.\n\
         Keep up the good work!!!\n\n\
         {admin_name}\n{admin_email}\nAffective Needs Special Education Teacher\n{school_name}\n",
        student_name = student.name,
        teacher_subject = teacher_subject,
        teacher_name = teacher.name,
        total_points = total_points,
        admin_name = school_admin.name,
        admin_email = school_admin.email,
        school_name = school.name,
    );

    AwardMessage {
        subject,
        html,
        text,
    }
}
