use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::models::ErrorResponse;
use crate::models::auth::responses::RefreshResponse;
use crate::utils::jwt::JwtUtils;

use super::AuthService;

/// 用 refresh token cookie 换取新的 access token
pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    let Some(refresh_token) = JwtUtils::extract_refresh_token_from_cookie(request) else {
        return Ok(
            HttpResponse::Unauthorized().json(ErrorResponse::new("Missing refresh token cookie"))
        );
    };

    match JwtUtils::refresh_access_token(&refresh_token) {
        Ok(access_token) => Ok(HttpResponse::Ok().json(RefreshResponse {
            message: "Token refreshed".to_string(),
            access_token,
            expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
        })),
        Err(e) => {
            info!("Refresh token rejected: {}", e);
            Ok(HttpResponse::Unauthorized()
                .json(ErrorResponse::new("Invalid or expired refresh token")))
        }
    }
}
