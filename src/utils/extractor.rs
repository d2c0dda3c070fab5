use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::ErrorResponse;

/// 安全的路径 ID 提取器
///
/// 取路径中最后一个参数并解析为 i64，非法输入直接返回 400，
/// 避免在各业务处理函数里重复解析。
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req
            .match_info()
            .iter()
            .last()
            .map(|(_, value)| value)
            .unwrap_or_default();

        let parsed = raw.parse::<i64>().map(SafeIDI64).map_err(|_| {
            let response = HttpResponse::BadRequest().json(ErrorResponse::with_error(
                "Invalid id",
                format!("'{raw}' is not a valid numeric id"),
            ));
            InternalError::from_response("invalid path id", response).into()
        });

        ready(parsed)
    }
}
