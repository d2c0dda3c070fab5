use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FormService;
use crate::middlewares::RequireJWT;
use crate::models::ErrorResponse;
use crate::models::accounts::Role;
use crate::models::forms::responses::FormListResponse;

// 三种角色都可列出本校表单；学校范围取自解析后的账号档案
pub async fn list_forms(service: &FormService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let account = match RequireJWT::extract_account(request) {
        Some(account) => account,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ErrorResponse::new("Authentication required"))
            );
        }
    };

    // 管理员的学校在创建前为空，此时没有可列出的范围
    let school_id = match account.school_id {
        Some(id) => id,
        None if account.role == Role::SchoolAdmin => {
            return Ok(HttpResponse::NotFound()
                .json(ErrorResponse::new("School not found, create a school first")));
        }
        None => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("School not found")));
        }
    };

    match storage.list_forms_by_school(school_id).await {
        Ok(forms) => Ok(HttpResponse::Ok().json(FormListResponse {
            message: "Forms Fetched Successfully".to_string(),
            forms,
        })),
        Err(e) => {
            error!("Failed to list forms for school {}: {}", school_id, e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)))
        }
    }
}
