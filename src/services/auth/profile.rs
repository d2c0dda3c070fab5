use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::ErrorResponse;
use crate::models::auth::responses::MeResponse;

/// 返回当前登录账号的档案
pub async fn handle_get_account(request: &HttpRequest) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_account(request) {
        Some(account) => Ok(HttpResponse::Ok().json(MeResponse { account })),
        None => Ok(HttpResponse::Unauthorized().json(ErrorResponse::new("Authentication required"))),
    }
}
