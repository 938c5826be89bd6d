use anyhow::Result;
use helperkit::{get_file_size, HelperError, LocalFileSystem};
use tempfile::TempDir;

/// 測試以本機檔案系統查詢檔案大小
#[tokio::test]
async fn test_file_size_of_written_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file_path = temp_dir.path().join("frame.jpg");
    tokio::fs::write(&file_path, vec![7u8; 2048]).await?;

    let size = get_file_size(&LocalFileSystem::new(), &file_path).await?;
    assert_eq!(size, 2048);

    let empty_path = temp_dir.path().join("empty.log");
    tokio::fs::write(&empty_path, b"").await?;
    assert_eq!(get_file_size(&LocalFileSystem::new(), &empty_path).await?, 0);

    Ok(())
}

/// 測試檔案不存在時錯誤原樣往上傳
#[tokio::test]
async fn test_missing_file_propagates_not_found() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let fs = LocalFileSystem::with_base_path(temp_dir.path());

    let err = get_file_size(&fs, "does-not-exist.mp4")
        .await
        .expect_err("missing file must fail");

    match err {
        HelperError::IoError(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected IoError, got {:?}", other),
    }
    Ok(())
}
