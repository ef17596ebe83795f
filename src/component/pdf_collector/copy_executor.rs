//! 批次複製
//!
//! 建立目的資料夾並依批次順序逐一複製檔案

use super::order_resolver::OrderedBatch;
use crate::error::CollectError;
use crate::tools::ensure_directory_exists;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// 每複製完一個檔案回報一次
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    /// 剛完成的檔案序號（從 1 開始）
    pub index: usize,
    pub total: usize,
    pub target_name: String,
}

/// 目的資料夾名稱: `{count}_files_{label}`
#[must_use]
pub fn destination_folder_name(count: usize, run_label: &str) -> String {
    format!("{count}_files_{run_label}")
}

/// 複製整個批次，回傳目的資料夾路徑
///
/// 任一檔案複製失敗即中止，已複製的檔案保留在目的資料夾中。
pub fn execute<F>(
    batch: &OrderedBatch,
    destination_root: &Path,
    run_label: &str,
    mut on_progress: F,
) -> Result<PathBuf, CollectError>
where
    F: FnMut(&ProgressEvent),
{
    let total = batch.len();
    let destination = destination_root.join(destination_folder_name(total, run_label));
    ensure_directory_exists(&destination)?;

    info!("開始複製 {} 個檔案到 {}", total, destination.display());

    for (i, file) in batch.iter().enumerate() {
        let target_path = destination.join(&file.target_name);

        fs::copy(&file.source_path, &target_path).map_err(|source| CollectError::CopyFailed {
            source_path: file.source_path.clone(),
            target_path: target_path.clone(),
            source,
        })?;

        debug!(
            "已複製: {} -> {}",
            file.source_path.display(),
            target_path.display()
        );

        on_progress(&ProgressEvent {
            index: i + 1,
            total,
            target_name: file.target_name.clone(),
        });
    }

    info!("複製完成: {}", destination.display());

    Ok(destination)
}
