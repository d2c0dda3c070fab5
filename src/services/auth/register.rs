use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::models::ErrorResponse;
use crate::models::auth::{RegisterRequest, responses::RegisterResponse};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple};

use super::AuthService;

/// 管理员注册，教师/学生账号由管理员在花名册中创建
pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 参数校验
    if let Err(e) = validate_email(&register_request.email) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::with_error("Invalid email", e)));
    }
    if let Err(e) = validate_password_simple(&register_request.password) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::with_error("Invalid password", e)));
    }

    // 邮箱唯一性检查
    match storage.get_admin_by_email(&register_request.email).await {
        Ok(Some(_)) => {
            return Ok(
                HttpResponse::Conflict().json(ErrorResponse::new("Email is already registered"))
            );
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check admin email: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)));
        }
    }

    // 哈希密码并创建管理员
    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash password: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)));
        }
    };

    match storage
        .create_admin(
            &register_request.name,
            &register_request.email,
            &password_hash,
        )
        .await
    {
        Ok(account) => {
            info!("Admin {} registered successfully", account.email);
            Ok(HttpResponse::Created().json(RegisterResponse {
                message: "Admin Registered Successfully".to_string(),
                account,
            }))
        }
        Err(e) => {
            error!("Admin registration failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)))
        }
    }
}
