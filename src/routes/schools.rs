use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole};
use crate::models::accounts::Role;
use crate::models::schools::requests::{CreateSchoolRequest, UpdateSchoolRequest};
use crate::services::SchoolService;
use crate::utils::SafeIDI64;

// 懒加载的全局 SchoolService 实例
static SCHOOL_SERVICE: Lazy<SchoolService> = Lazy::new(SchoolService::new_lazy);

// 创建学校
pub async fn create_school(
    req: HttpRequest,
    body: web::Json<CreateSchoolRequest>,
) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE.create_school(&req, body.into_inner()).await
}

// 获取学校信息
pub async fn get_school(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE.get_school(&req, path.0).await
}

// 更新学校信息
pub async fn update_school(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateSchoolRequest>,
) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE
        .update_school(&req, path.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_schools_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/schools")
            .wrap(middlewares::RequireJWT)
            // 创建学校 - 仅学校管理员
            .service(
                web::resource("").route(
                    web::post()
                        .to(create_school)
                        .wrap(RequireRole::new_any(Role::admin_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    // 获取学校信息 - 所有登录用户可访问
                    .route(web::get().to(get_school))
                    // 更新学校信息 - 仅学校管理员
                    .route(
                        web::put()
                            .to(update_school)
                            .wrap(RequireRole::new_any(Role::admin_roles())),
                    ),
            ),
    );
}
