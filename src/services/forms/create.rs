use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::FormService;
use crate::middlewares::RequireJWT;
use crate::models::ErrorResponse;
use crate::models::forms::{requests::FormPayload, responses::FormResponse};

pub async fn create_form(
    service: &FormService,
    request: &HttpRequest,
    payload: FormPayload,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let account_id = match RequireJWT::extract_account_id(request) {
        Some(id) => id,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ErrorResponse::new("Authentication required"))
            );
        }
    };

    // 表单挂在调用者名下的学校
    let school = match storage.get_school_by_admin(account_id).await {
        Ok(Some(school)) => school,
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .json(ErrorResponse::new("School not found, create a school first")));
        }
        Err(e) => {
            error!("Failed to resolve school for admin {}: {}", account_id, e);
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)));
        }
    };

    match storage.create_form(school.id, payload).await {
        Ok(form) => {
            info!(
                "Form {} ({}) created for school {}",
                form.form_name, form.form_type, school.id
            );
            Ok(HttpResponse::Ok().json(FormResponse {
                message: "Form Created Successfully".to_string(),
                form,
            }))
        }
        Err(e) => {
            error!("Form creation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)))
        }
    }
}
