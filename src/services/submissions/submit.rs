use std::time::Duration;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::SubmissionService;
use crate::config::AppConfig;
use crate::middlewares::RequireJWT;
use crate::models::ErrorResponse;
use crate::models::submissions::entities::total_points;
use crate::models::submissions::requests::{PointAwardRecord, SubmitFormRequest};
use crate::models::submissions::responses::SubmitFormResponse;
use crate::notify::{CouponData, build_award_message, build_fanout_plan, dispatch_notifications, render_coupon_attachment};

/// 教师提交表单的完整流程
///
/// 1. 逐项校验引用：教师、表单、学生、学校、学校管理员，缺一即 404；
/// 2. 合计 answers 的 points；
/// 3. 提交记录 + 余额自增 + 流水条目在一个存储事务内落库；
/// 4. 落库之后才扇出通知，任何一路失败只记入结果，不回滚已提交的写入；
/// 5. 返回提交记录与各收件人的发送结果。
pub async fn submit_form(
    service: &SubmissionService,
    request: &HttpRequest,
    form_id: i64,
    submission: SubmitFormRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let teacher_id = match RequireJWT::extract_account_id(request) {
        Some(id) => id,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ErrorResponse::new("Authentication required"))
            );
        }
    };

    // 1. 引用校验，全部显式判空
    let teacher = match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(teacher)) => teacher,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Teacher not found")));
        }
        Err(e) => {
            error!("Failed to fetch teacher {}: {}", teacher_id, e);
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)));
        }
    };

    let form = match storage.get_form_by_id(form_id).await {
        Ok(Some(form)) => form,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Form doesn't exist")));
        }
        Err(e) => {
            error!("Failed to fetch form {}: {}", form_id, e);
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)));
        }
    };

    let student = match storage.get_student_by_id(submission.submitted_for).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Student not found")));
        }
        Err(e) => {
            error!(
                "Failed to fetch student {}: {}",
                submission.submitted_for, e
            );
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)));
        }
    };

    let school = match storage.get_school_by_id(teacher.school_id).await {
        Ok(Some(school)) => school,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("School not found")));
        }
        Err(e) => {
            error!("Failed to fetch school {}: {}", teacher.school_id, e);
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)));
        }
    };

    let school_admin = match storage.get_admin_by_id(school.created_by).await {
        Ok(Some(admin)) => admin,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("School admin not found")));
        }
        Err(e) => {
            error!("Failed to fetch school admin {}: {}", school.created_by, e);
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)));
        }
    };

    // 2. 积分合计（空答卷为 0）
    let total = total_points(&submission.answers);

    // 3. 单事务落库：提交记录 + 余额自增 + 流水
    let record = PointAwardRecord {
        form_id: form.id,
        teacher_id: teacher.id,
        answers: submission.answers,
        total_points: total,
        form_type: form.form_type.clone(),
        form_name: form.form_name.clone(),
        teacher_name: teacher.name.clone(),
        student_id: student.id,
        student_name: student.name.clone(),
        school_id: teacher.school_id,
    };

    let (form_submission, _history) = match storage.record_point_award(record).await {
        Ok(result) => result,
        Err(e) => {
            error!("Point award transaction failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)));
        }
    };

    info!(
        "Form {} submitted by teacher {} for student {}: {} points",
        form.id, teacher.id, student.id, total
    );

    // 4. 通知扇出（写入已提交，这里的失败只记录结果）
    let message = build_award_message(total, &student, &teacher, &school_admin, &school);
    let coupon = render_coupon_attachment(&CouponData {
        points: total,
        student_name: student.name.clone(),
        teacher_name: teacher.name.clone(),
        subject: teacher.subject.clone(),
        date_string: chrono::Utc::now().format("%a %b %d %Y").to_string(),
        school_logo_url: school.logo_url.clone(),
        school_name: school.name.clone(),
        teacher_email: teacher.email.clone(),
        parent_email: student.parent_email.clone(),
    });

    let plan = build_fanout_plan(&form, &teacher, &student, &school_admin);
    let mailer = service.get_mailer(request);
    let send_timeout = Duration::from_secs(AppConfig::get().smtp.send_timeout);

    let notifications =
        dispatch_notifications(mailer.as_deref(), plan, &message, Some(&coupon), send_timeout)
            .await;

    let failed = notifications.iter().filter(|o| !o.delivered).count();
    if failed > 0 {
        warn!(
            "{} of {} award notifications failed for submission {}",
            failed,
            notifications.len(),
            form_submission.id
        );
    }

    // 5. 响应提交记录与各收件人结果
    Ok(HttpResponse::Ok().json(SubmitFormResponse {
        message: "Form Submitted Successfully".to_string(),
        form_submission,
        notifications,
    }))
}
