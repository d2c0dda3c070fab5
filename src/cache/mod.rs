//! 缓存层
//!
//! 通过注册表以插件方式提供缓存后端，当前支持 Moka（内存）与 Redis。
//! 后端使用 `declare_object_cache_plugin!` 宏在程序启动时自注册。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个缓存后端插件
///
/// 被声明类型需要提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $plugin:ty) => {
        #[ctor::ctor]
        unsafe fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| -> $crate::cache::register::BoxedObjectCacheFuture {
                    Box::pin(async {
                        let plugin = <$plugin>::new()
                            .map_err($crate::errors::PointSystemError::cache_connection)?;
                        Ok(Box::new(plugin) as Box<dyn $crate::cache::ObjectCache>)
                    })
                }),
            );
        }
    };
}
