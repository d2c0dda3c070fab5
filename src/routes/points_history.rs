use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole};
use crate::models::accounts::Role;
use crate::services::PointsService;

// 懒加载的全局 PointsService 实例
static POINTS_SERVICE: Lazy<PointsService> = Lazy::new(PointsService::new_lazy);

// 列出本校积分流水
pub async fn list_point_history(req: HttpRequest) -> ActixResult<HttpResponse> {
    POINTS_SERVICE.list_point_history(&req).await
}

// 配置路由
pub fn configure_points_history_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/points-history")
            .wrap(middlewares::RequireJWT)
            // 积分流水 - 仅管理员与教师，学生一律 403
            .service(
                web::resource("")
                    .route(web::get().to(list_point_history))
                    .wrap(RequireRole::new_any(Role::staff_roles())),
            ),
    );
}
