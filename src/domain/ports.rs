use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub trait FileSystem: Send + Sync {
    fn file_size(&self, path: &Path) -> impl std::future::Future<Output = Result<u64>> + Send;
}

/// 分析事件的送出端，payload 已是完整的 capture 請求內容
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn capture(&self, payload: serde_json::Value) -> Result<()>;
}
