use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::FormService;
use crate::models::ErrorResponse;
use crate::models::forms::responses::DeleteFormResponse;

// 按 ID 删除，返回被删表单的名称；对学生积分与流水无任何副作用
pub async fn delete_form(
    service: &FormService,
    request: &HttpRequest,
    form_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_form(form_id).await {
        Ok(Some(form)) => {
            info!("Form {} ({}) deleted", form_id, form.form_name);
            Ok(HttpResponse::Ok().json(DeleteFormResponse {
                form_name: form.form_name,
            }))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorResponse::new("Form doesn't exist"))),
        Err(e) => {
            error!("Form deletion failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)))
        }
    }
}
