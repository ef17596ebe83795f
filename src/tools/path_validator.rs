use crate::error::CollectError;
use std::fs;
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<(), CollectError> {
    if !path.is_dir() {
        return Err(CollectError::InvalidDirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// 建立資料夾（已存在時視為成功）
pub fn ensure_directory_exists(path: &Path) -> Result<(), CollectError> {
    fs::create_dir_all(path).map_err(|source| CollectError::DestinationUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// 取得資料夾的基本名稱，無法取得時退回完整路徑
#[must_use]
pub fn directory_label(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().to_string();
    }

    fs::canonicalize(path)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_else(|| path.display().to_string())
}
