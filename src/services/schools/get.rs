use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SchoolService;
use crate::models::ErrorResponse;
use crate::models::schools::responses::SchoolResponse;

pub async fn get_school(
    service: &SchoolService,
    request: &HttpRequest,
    school_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_school_by_id(school_id).await {
        Ok(Some(school)) => Ok(HttpResponse::Ok().json(SchoolResponse {
            message: "School Fetched Successfully".to_string(),
            school,
        })),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorResponse::new("School not found"))),
        Err(e) => {
            error!("Failed to fetch school {}: {}", school_id, e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)))
        }
    }
}
