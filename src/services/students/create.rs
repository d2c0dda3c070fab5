use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::middlewares::RequireJWT;
use crate::models::ErrorResponse;
use crate::models::students::{requests::CreateStudentRequest, responses::StudentResponse};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple};

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    student_data: CreateStudentRequest,
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

    // 参数校验；家长邮箱可选，填了就必须合法
    if let Err(e) = validate_email(&student_data.email) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::with_error("Invalid email", e)));
    }
    if let Some(ref parent_email) = student_data.parent_email
        && !parent_email.is_empty()
        && let Err(e) = validate_email(parent_email)
    {
        return Ok(
            HttpResponse::BadRequest().json(ErrorResponse::with_error("Invalid parent email", e))
        );
    }
    if let Err(e) = validate_password_simple(&student_data.password) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::with_error("Invalid password", e)));
    }

    // 邮箱唯一性检查
    match storage.get_student_by_email(&student_data.email).await {
        Ok(Some(_)) => {
            return Ok(
                HttpResponse::Conflict().json(ErrorResponse::new("Email is already registered"))
            );
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check student email: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)));
        }
    }

    let password_hash = match hash_password(&student_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash password: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)));
        }
    };

    match storage
        .create_student(school_id, student_data, password_hash)
        .await
    {
        Ok(student) => {
            info!("Student {} created for school {}", student.email, school_id);
            Ok(HttpResponse::Ok().json(StudentResponse {
                message: "Student Created Successfully".to_string(),
                student,
            }))
        }
        Err(e) => {
            error!("Student creation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::server_error(e)))
        }
    }
}
