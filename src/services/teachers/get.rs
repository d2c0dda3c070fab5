use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherService;
use crate::models::ErrorResponse;
use crate::models::teachers::responses::TeacherResponse;

pub async fn get_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok().json(TeacherResponse {
            message: "Teacher Fetched Successfully".to_string(),
            teacher,
        })),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorResponse::new("Teacher not found"))),
        Err(e) => {
            error!("Failed to fetch teacher {}: {}", teacher_id, e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)))
        }
    }
}
