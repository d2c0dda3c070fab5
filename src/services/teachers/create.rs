use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TeacherService;
use crate::middlewares::RequireJWT;
use crate::models::ErrorResponse;
use crate::models::teachers::{requests::CreateTeacherRequest, responses::TeacherResponse};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple};

pub async fn create_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_data: CreateTeacherRequest,
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

    // 参数校验
    if let Err(e) = validate_email(&teacher_data.email) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::with_error("Invalid email", e)));
    }
    if let Err(e) = validate_password_simple(&teacher_data.password) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::with_error("Invalid password", e)));
    }

    // 邮箱唯一性检查
    match storage.get_teacher_by_email(&teacher_data.email).await {
        Ok(Some(_)) => {
            return Ok(
                HttpResponse::Conflict().json(ErrorResponse::new("Email is already registered"))
            );
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check teacher email: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)));
        }
    }

    let password_hash = match hash_password(&teacher_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash password: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)));
        }
    };

    match storage
        .create_teacher(school_id, teacher_data, password_hash)
        .await
    {
        Ok(teacher) => {
            info!("Teacher {} created for school {}", teacher.email, school_id);
            Ok(HttpResponse::Ok().json(TeacherResponse {
                message: "Teacher Created Successfully".to_string(),
                teacher,
            }))
        }
        Err(e) => {
            error!("Teacher creation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)))
        }
    }
}
