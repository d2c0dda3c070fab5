pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::SubmitFormRequest;
use crate::notify::Mailer;
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
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

    pub(crate) fn get_mailer(&self, request: &HttpRequest) -> Option<Arc<Mailer>> {
        request
            .app_data::<actix_web::web::Data<Option<Arc<Mailer>>>>()
            .and_then(|data| data.get_ref().clone())
    }

    // 教师提交表单：积分入账 + 通知扇出
    pub async fn submit_form(
        &self,
        request: &HttpRequest,
        form_id: i64,
        submission: SubmitFormRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_form(self, request, form_id, submission).await
    }
}
