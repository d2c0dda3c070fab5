use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::FormService;
use crate::models::ErrorResponse;
use crate::models::forms::{requests::FormPayload, responses::FormResponse};

// 按 ID 全字段替换；除表单存在外不做归属校验
pub async fn update_form(
    service: &FormService,
    request: &HttpRequest,
    form_id: i64,
    payload: FormPayload,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_form(form_id, payload).await {
        Ok(Some(form)) => {
            info!("Form {} edited", form_id);
            Ok(HttpResponse::Ok().json(FormResponse {
                message: "Form Edited Successfully".to_string(),
                form,
            }))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorResponse::new("Form doesn't exist"))),
        Err(e) => {
            error!("Form edit failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)))
        }
    }
}
