use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ErrorResponse;
use crate::models::auth::{LoginRequest, responses::LoginResponse};
use crate::services::identity;
use crate::utils::jwt;
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 1. 按 (role, email) 解析账号
    match identity::resolve_account_by_email(&storage, &login_request.role, &login_request.email)
        .await
    {
        Ok(Some(account)) => {
            // 2. 验证密码
            if verify_password(&login_request.password, &account.password_hash) {
                // 3. 生成令牌对
                match account.generate_token_pair(login_request.remember_me.then(|| {
                    chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry)
                })) {
                    Ok(token_pair) => {
                        tracing::info!(
                            "Account {} ({}) logged in successfully",
                            account.email,
                            account.role
                        );

                        let response = LoginResponse {
                            message: "Login successful".to_string(),
                            access_token: token_pair.access_token,
                            expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                            account,
                        };

                        // 4. 创建 refresh token cookie
                        let refresh_cookie =
                            jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

                        Ok(HttpResponse::Ok().cookie(refresh_cookie).json(response))
                    }
                    Err(e) => {
                        tracing::error!("Failed to generate JWT token: {}", e);
                        Ok(HttpResponse::InternalServerError().json(ErrorResponse::with_error(
                            "Login failed, unable to generate token",
                            e,
                        )))
                    }
                }
            } else {
                Ok(HttpResponse::Unauthorized()
                    .json(ErrorResponse::new("Email or password is incorrect")))
            }
        }
        Ok(None) => Ok(
            HttpResponse::Unauthorized().json(ErrorResponse::new("Email or password is incorrect"))
        ),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e))),
    }
}
