use crate::domain::ports::FileSystem;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct LocalFileSystem {
    base_path: Option<PathBuf>,
}

impl LocalFileSystem {
    pub fn new() -> Self {
        Self { base_path: None }
    }

    /// 相對路徑以 `base_path` 為根，絕對路徑不受影響
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: Some(base_path.into()),
        }
    }

    fn full_path(&self, path: &Path) -> PathBuf {
        match &self.base_path {
            Some(base) => base.join(path),
            None => path.to_path_buf(),
        }
    }
}

impl FileSystem for LocalFileSystem {
    async fn file_size(&self, path: &Path) -> Result<u64> {
        let metadata = tokio::fs::metadata(self.full_path(path)).await?;
        Ok(metadata.len())
    }
}
