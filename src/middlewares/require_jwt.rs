/*!
 * JWT 认证中间件
 *
 * 此中间件用于验证 JWT 令牌的有效性，并通过角色解析器把 (role, id)
 * 解析为统一的账号档案，确保只有经过身份验证的用户才能访问受保护的路由。
 *
 * ## 使用方法
 *
 * 1. 在路由上应用中间件：
 * ```rust,ignore
 * use actix_web::{web, App, HttpServer};
 * use crate::middlewares::require_jwt::RequireJWT;
 *
 * HttpServer::new(|| {
 *     App::new()
 *         .service(
 *             web::scope("/api")
 *                 .wrap(RequireJWT)  // 应用JWT验证中间件
 *                 .route("/protected", web::get().to(protected_handler))
 *         )
 * })
 * ```
 *
 * 2. 在处理程序中提取账号信息：
 * ```rust,ignore
 * async fn protected_handler(req: HttpRequest) -> Result<HttpResponse> {
 *     if let Some(account) = RequireJWT::extract_account(&req) {
 *         return Ok(HttpResponse::Ok().json(format!("Hello, {}!", account.name)));
 *     }
 *     Ok(HttpResponse::InternalServerError().finish())
 * }
 * ```
 *
 * ## 认证流程
 *
 * 1. 客户端在请求头中包含 `Authorization: Bearer <JWT_TOKEN>`
 * 2. 中间件提取并验证JWT令牌
 * 3. 令牌中的角色必须属于封闭集合 {school_admin, teacher, student}，
 *    其他角色一律 403
 * 4. 按 (role, id) 解析账号档案，存入请求扩展，继续处理请求
 * 5. 令牌无效或缺失时返回 401 未授权错误
 */

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::models::accounts::{Account, Role};
use crate::services::identity;
use crate::storage::Storage;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

// 认证失败的两种去向：401（令牌问题）与 403（角色不在封闭集合内）
enum AuthFailure {
    Unauthorized(String),
    Forbidden,
}

// 辅助函数：提取并验证 JWT access token，解析出账号档案
async fn extract_and_resolve_account(req: &ServiceRequest) -> Result<Account, AuthFailure> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| {
            AuthFailure::Unauthorized("Missing or invalid Authorization header".to_string())
        })?;

    crate::utils::jwt::JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        AuthFailure::Unauthorized("Invalid JWT token".to_string())
    })?;

    let cache = req
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone();

    // 从缓存中获取账号档案
    match cache.get_raw(&format!("account:{token}")).await {
        CacheResult::Found(json) => match serde_json::from_str::<Account>(&json) {
            Ok(account) => return Ok(account),
            Err(_) => {
                cache.remove(&format!("account:{token}")).await;
                info!(
                    "Failed to deserialize account from cache for token: {}",
                    token
                );
            }
        },
        _ => {
            info!("Account not found in cache for token: {}", token);
        }
    };

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    let claims = crate::utils::jwt::JwtUtils::decode_token(token).map_err(|err| {
        info!("Failed to decode JWT token: {}", err);
        AuthFailure::Unauthorized("Invalid JWT token format".to_string())
    })?;

    let account_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| AuthFailure::Unauthorized("Invalid account ID in JWT".to_string()))?;

    // 角色解析器只接受封闭集合，其余一律 403
    let role = claims.role.parse::<Role>().map_err(|_| {
        info!("Rejected token with unknown role: {}", claims.role);
        AuthFailure::Forbidden
    })?;

    let account = identity::resolve_account(&storage, &role, account_id)
        .await
        .map_err(|_| {
            AuthFailure::Unauthorized("Failed to retrieve account from storage".to_string())
        })?
        .ok_or_else(|| AuthFailure::Unauthorized("Account not found".to_string()))?;

    // 将账号档案存入缓存
    let app_config = AppConfig::get();
    if let Ok(account_json) = serde_json::to_string(&account) {
        cache
            .insert_raw(
                format!("account:{token}"),
                account_json,
                app_config.cache.default_ttl,
            )
            .await;
    }

    Ok(account)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            // 验证 JWT token 并解析账号
            match extract_and_resolve_account(&req).await {
                Ok(account) => {
                    debug!("JWT authentication successful for ID: {}", account.id);
                    req.extensions_mut().insert(account);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(AuthFailure::Unauthorized(err)) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
                Err(AuthFailure::Forbidden) => Ok(req.into_response(
                    create_error_response(StatusCode::FORBIDDEN, "Forbidden")
                        .map_into_right_body(),
                )),
            }
        })
    }
}

// 辅助函数：从请求中提取账号信息
impl RequireJWT {
    /// 从请求扩展中提取账号档案
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_account(req: &actix_web::HttpRequest) -> Option<Account> {
        req.extensions().get::<Account>().cloned()
    }

    /// 从请求扩展中提取账号ID
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_account_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<Account>().map(|account| account.id)
    }

    /// 从请求扩展中提取账号角色
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_role(req: &actix_web::HttpRequest) -> Option<Role> {
        req.extensions()
            .get::<Account>()
            .map(|account| account.role.clone())
    }
}
