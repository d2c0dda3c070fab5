pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::forms::requests::FormPayload;
use crate::storage::Storage;

pub struct FormService {
    storage: Option<Arc<dyn Storage>>,
}

impl FormService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建表单（归属调用者名下的学校）
    pub async fn create_form(
        &self,
        request: &HttpRequest,
        payload: FormPayload,
    ) -> ActixResult<HttpResponse> {
        create::create_form(self, request, payload).await
    }

    // 编辑表单（全字段替换）
    pub async fn update_form(
        &self,
        request: &HttpRequest,
        form_id: i64,
        payload: FormPayload,
    ) -> ActixResult<HttpResponse> {
        update::update_form(self, request, form_id, payload).await
    }

    // 列出调用者学校的表单
    pub async fn list_forms(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_forms(self, request).await
    }

    // 按 ID 获取表单
    pub async fn get_form(&self, request: &HttpRequest, form_id: i64) -> ActixResult<HttpResponse> {
        get::get_form(self, request, form_id).await
    }

    // 按 ID 删除表单
    pub async fn delete_form(
        &self,
        request: &HttpRequest,
        form_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_form(self, request, form_id).await
    }
}
