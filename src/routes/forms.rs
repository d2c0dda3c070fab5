use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole};
use crate::models::accounts::Role;
use crate::models::forms::requests::FormPayload;
use crate::models::submissions::requests::SubmitFormRequest;
use crate::services::{FormService, SubmissionService};
use crate::utils::SafeIDI64;

// 懒加载的全局服务实例
static FORM_SERVICE: Lazy<FormService> = Lazy::new(FormService::new_lazy);
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 创建表单
pub async fn create_form(
    req: HttpRequest,
    body: web::Json<FormPayload>,
) -> ActixResult<HttpResponse> {
    FORM_SERVICE.create_form(&req, body.into_inner()).await
}

// 列出本校表单
pub async fn list_forms(req: HttpRequest) -> ActixResult<HttpResponse> {
    FORM_SERVICE.list_forms(&req).await
}

// 获取表单详情
pub async fn get_form(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    FORM_SERVICE.get_form(&req, path.0).await
}

// 编辑表单
pub async fn update_form(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<FormPayload>,
) -> ActixResult<HttpResponse> {
    FORM_SERVICE
        .update_form(&req, path.0, body.into_inner())
        .await
}

// 删除表单
pub async fn delete_form(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    FORM_SERVICE.delete_form(&req, path.0).await
}

// 教师提交表单（积分入账）
pub async fn submit_form(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<SubmitFormRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .submit_form(&req, path.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_forms_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/forms")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出表单 - 三种角色都可访问（业务层按学校过滤）
                    .route(web::get().to(list_forms))
                    // 创建表单 - 仅学校管理员
                    .route(
                        web::post()
                            .to(create_form)
                            .wrap(RequireRole::new_any(Role::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    // 获取表单详情 - 所有登录用户可访问（按 ID 直取，无学校校验）
                    .route(web::get().to(get_form))
                    // 编辑表单 - 仅学校管理员
                    .route(
                        web::put()
                            .to(update_form)
                            .wrap(RequireRole::new_any(Role::admin_roles())),
                    )
                    // 删除表单 - 仅学校管理员
                    .route(
                        web::delete()
                            .to(delete_form)
                            .wrap(RequireRole::new_any(Role::admin_roles())),
                    ),
            )
            // 提交表单 - 仅教师
            .service(
                web::resource("/{formId}/submissions").route(
                    web::post()
                        .to(submit_form)
                        .wrap(RequireRole::new(&Role::Teacher)),
                ),
            ),
    );
}
