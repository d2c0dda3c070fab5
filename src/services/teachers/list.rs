use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherService;
use crate::middlewares::RequireJWT;
use crate::models::ErrorResponse;
use crate::models::teachers::requests::TeacherListParams;

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
    query: TeacherListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let account = match RequireJWT::extract_account(request) {
        Some(account) => account,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ErrorResponse::new("Authentication required"))
            );
        }
    };

    let school_id = match account.school_id {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::NotFound()
                .json(ErrorResponse::new("School not found, create a school first")));
        }
    };

    match storage
        .list_teachers_with_pagination(school_id, query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            error!("Failed to list teachers for school {}: {}", school_id, e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)))
        }
    }
}
