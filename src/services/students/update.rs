use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::ErrorResponse;
use crate::models::students::{requests::UpdateStudentRequest, responses::StudentResponse};
use crate::utils::validate::validate_email;

// points 不可经此更新，余额只随积分入账事务变化
pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref email) = update_data.email
        && let Err(e) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::with_error("Invalid email", e)));
    }

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => {
            info!("Student {} updated", student_id);
            Ok(HttpResponse::Ok().json(StudentResponse {
                message: "Student Edited Successfully".to_string(),
                student,
            }))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorResponse::new("Student not found"))),
        Err(e) => {
            error!("Student update failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)))
        }
    }
}
