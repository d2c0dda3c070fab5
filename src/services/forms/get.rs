use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FormService;
use crate::models::ErrorResponse;
use crate::models::forms::responses::FormDetailResponse;

// 按 ID 直接取表单，不做学校范围校验；不存在时 form 为 null
pub async fn get_form(
    service: &FormService,
    request: &HttpRequest,
    form_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_form_by_id(form_id).await {
        Ok(form) => Ok(HttpResponse::Ok().json(FormDetailResponse { form })),
        Err(e) => {
            error!("Failed to fetch form {}: {}", form_id, e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)))
        }
    }
}
