use crate::domain::ports::FileSystem;
use crate::utils::error::Result;
use std::path::Path;

/// 查詢檔案大小（位元組）；檔案不存在等錯誤直接往上傳
pub async fn get_file_size<F: FileSystem>(fs: &F, path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let size = fs.file_size(path).await?;
    tracing::debug!("{} is {} bytes", path.display(), size);
    Ok(size)
}
