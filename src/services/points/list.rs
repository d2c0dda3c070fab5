use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::PointsService;
use crate::middlewares::RequireJWT;
use crate::models::ErrorResponse;
use crate::models::points::responses::PointHistoryResponse;

// 仅管理员与教师可读（路由层已按角色拦截学生），
// 返回本校全部流水，不过滤不分页
pub async fn list_point_history(
    service: &PointsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let account = match RequireJWT::extract_account(request) {
        Some(account) => account,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ErrorResponse::new("Authentication required"))
            );
        }
    };

    let school_id = match account.school_id {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::NotFound()
                .json(ErrorResponse::new("School not found, create a school first")));
        }
    };

    match storage.list_points_history_by_school(school_id).await {
        Ok(point_history) => Ok(HttpResponse::Ok().json(PointHistoryResponse { point_history })),
        Err(e) => {
            error!(
                "Failed to list points history for school {}: {}",
                school_id, e
            );
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)))
        }
    }
}
