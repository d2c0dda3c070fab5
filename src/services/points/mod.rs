pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct PointsService {
    storage: Option<Arc<dyn Storage>>,
}

impl PointsService {
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

    // 列出调用者学校的积分流水
    pub async fn list_point_history(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_point_history(self, request).await
    }
}
