use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::ErrorResponse;

pub async fn delete_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_student(student_id).await {
        Ok(true) => {
            info!("Student {} deleted", student_id);
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "message": "Student Deleted Successfully"
            })))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ErrorResponse::new("Student not found"))),
        Err(e) => {
            error!("Student deletion failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)))
        }
    }
}
