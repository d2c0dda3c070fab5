use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::SchoolService;
use crate::middlewares::RequireJWT;
use crate::models::ErrorResponse;
use crate::models::schools::{requests::CreateSchoolRequest, responses::SchoolResponse};

pub async fn create_school(
    service: &SchoolService,
    request: &HttpRequest,
    school_data: CreateSchoolRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let admin_id = match RequireJWT::extract_account_id(request) {
        Some(id) => id,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ErrorResponse::new("Authentication required"))
            );
        }
    };

    // 一位管理员只拥有一所学校
    match storage.get_school_by_admin(admin_id).await {
        Ok(Some(_)) => {
            return Ok(
                HttpResponse::Conflict().json(ErrorResponse::new("School already exists"))
            );
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check existing school: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)));
        }
    }

    match storage.create_school(admin_id, school_data).await {
        Ok(school) => {
            // 回填管理员档案中的 school_id
            if let Err(e) = storage.set_admin_school(admin_id, school.id).await {
                warn!("Failed to backfill admin {} school id: {}", admin_id, e);
            }

            info!("School {} created by admin {}", school.name, admin_id);
            Ok(HttpResponse::Ok().json(SchoolResponse {
                message: "School Created Successfully".to_string(),
                school,
            }))
        }
        Err(e) => {
            error!("School creation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)))
        }
    }
}
