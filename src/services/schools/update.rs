use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SchoolService;
use crate::models::ErrorResponse;
use crate::models::schools::{requests::UpdateSchoolRequest, responses::SchoolResponse};

pub async fn update_school(
    service: &SchoolService,
    request: &HttpRequest,
    school_id: i64,
    update_data: UpdateSchoolRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_school(school_id, update_data).await {
        Ok(Some(school)) => {
            info!("School {} updated", school_id);
            Ok(HttpResponse::Ok().json(SchoolResponse {
                message: "School Edited Successfully".to_string(),
                school,
            }))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorResponse::new("School not found"))),
        Err(e) => {
            error!("School update failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)))
        }
    }
}
