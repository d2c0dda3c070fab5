use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TeacherService;
use crate::models::ErrorResponse;
use crate::models::teachers::{requests::UpdateTeacherRequest, responses::TeacherResponse};
use crate::utils::validate::validate_email;

pub async fn update_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: i64,
    update_data: UpdateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref email) = update_data.email
        && let Err(e) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::with_error("Invalid email", e)));
    }

    match storage.update_teacher(teacher_id, update_data).await {
        Ok(Some(teacher)) => {
            info!("Teacher {} updated", teacher_id);
            Ok(HttpResponse::Ok().json(TeacherResponse {
                message: "Teacher Edited Successfully".to_string(),
                teacher,
            }))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorResponse::new("Teacher not found"))),
        Err(e) => {
            error!("Teacher update failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)))
        }
    }
}
