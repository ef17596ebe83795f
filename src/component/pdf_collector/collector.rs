//! PDF 收集器
//!
//! 掃描來源資料夾的每個子資料夾，找出其中的「Complete」資料夾並收集 PDF，
//! 以子資料夾名稱作為前綴產生新檔名

use super::folder_matcher::is_complete_folder;
use crate::error::CollectError;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 子資料夾名稱與原始檔名之間的分隔字元
pub const TARGET_NAME_SEPARATOR: char = '_';

/// 收集方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionMode {
    /// 只檢查每個子資料夾的第一層「Complete」資料夾，並加上子資料夾前綴
    #[default]
    Primary,
    /// 遞迴掃描整個目錄樹，資料夾名稱包含「Complete」即收集，不重新命名
    Legacy,
}

impl fmt::Display for CollectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

/// 已收集的 PDF 檔案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedFile {
    /// 原始檔案路徑
    pub source_path: PathBuf,
    /// 複製到目的資料夾時使用的檔名
    pub target_name: String,
}

impl CollectedFile {
    /// 原始檔名（不含路徑）
    #[must_use]
    pub fn original_name(&self) -> &str {
        self.source_path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or_default()
    }
}

#[must_use]
pub fn is_pdf_file_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}

#[must_use]
pub fn target_name_for(subfolder_name: &str, file_name: &str) -> String {
    format!("{subfolder_name}{TARGET_NAME_SEPARATOR}{file_name}")
}

/// 依收集方式掃描來源資料夾
pub fn collect_with_mode(
    source_root: &Path,
    mode: CollectionMode,
) -> Result<Vec<CollectedFile>, CollectError> {
    match mode {
        CollectionMode::Primary => collect(source_root),
        CollectionMode::Legacy => collect_legacy(source_root),
    }
}

/// 收集每個子資料夾中「Complete」資料夾內的 PDF
///
/// 回傳順序即掃描順序（子資料夾、Complete 資料夾、檔名皆依名稱排序），
/// 同一棵目錄樹重複掃描會得到相同結果。
pub fn collect(source_root: &Path) -> Result<Vec<CollectedFile>, CollectError> {
    info!("開始收集 PDF: {}", source_root.display());

    let mut collected = Vec::new();

    for subdirectory in list_directories(source_root)? {
        let Some(subfolder_name) = utf8_file_name(&subdirectory) else {
            continue;
        };

        let complete_folders = match list_directories(subdirectory.path()) {
            Ok(dirs) => dirs,
            Err(e) => {
                warn!("略過無法讀取的子資料夾: {e}");
                continue;
            }
        };

        for complete_folder in complete_folders
            .into_iter()
            .filter(|dir| is_complete_folder(&dir.file_name().to_string_lossy()))
        {
            debug!("找到 Complete 資料夾: {}", complete_folder.path().display());

            for pdf in list_pdf_files(complete_folder.path()) {
                let Some(file_name) = utf8_file_name(&pdf) else {
                    continue;
                };
                collected.push(CollectedFile {
                    target_name: target_name_for(subfolder_name, file_name),
                    source_path: pdf.into_path(),
                });
            }
        }
    }

    info!("收集完成，共 {} 個 PDF", collected.len());

    Ok(collected)
}

/// 遞迴收集名稱包含「Complete」的資料夾內的 PDF，保留原始檔名
pub fn collect_legacy(source_root: &Path) -> Result<Vec<CollectedFile>, CollectError> {
    info!("開始收集 PDF（完整掃描）: {}", source_root.display());

    let mut collected = Vec::new();

    for entry in WalkDir::new(source_root)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if e.depth() == 0 => {
                return Err(CollectError::SourceUnreadable {
                    path: source_root.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                warn!("略過無法讀取的項目: {e}");
                continue;
            }
        };

        // 不進入連結的資料夾，但連結到檔案的項目照常收集
        if !entry.path().is_file() {
            continue;
        }

        let in_complete_folder = entry
            .path()
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|parent| parent.to_string_lossy().contains("Complete"));

        if !in_complete_folder || !is_pdf_file_name(&entry.file_name().to_string_lossy()) {
            continue;
        }

        if let Some(file_name) = utf8_file_name(&entry) {
            collected.push(CollectedFile {
                target_name: file_name.to_string(),
                source_path: entry.into_path(),
            });
        }
    }

    info!("收集完成，共 {} 個 PDF", collected.len());

    Ok(collected)
}

/// 檔名不是合法 UTF-8 時記錄警告並回傳 `None`
fn utf8_file_name(entry: &DirEntry) -> Option<&str> {
    let name = entry.file_name().to_str();
    if name.is_none() {
        warn!("略過非 UTF-8 名稱: {}", entry.path().display());
    }
    name
}

/// 列出第一層子資料夾（依名稱排序，連結會被追蹤）
fn list_directories(directory: &Path) -> Result<Vec<DirEntry>, CollectError> {
    let mut directories = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        match entry {
            Ok(e) if e.file_type().is_dir() => directories.push(e),
            Ok(_) => {}
            Err(e) if e.depth() == 0 => {
                return Err(CollectError::SourceUnreadable {
                    path: directory.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => warn!("略過無法讀取的項目: {e}"),
        }
    }

    Ok(directories)
}

/// 列出資料夾中（不遞迴）的 PDF 檔案（依名稱排序，連結會被追蹤）
fn list_pdf_files(directory: &Path) -> Vec<DirEntry> {
    WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                warn!("略過無法讀取的項目: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| is_pdf_file_name(&entry.file_name().to_string_lossy()))
        .collect()
}
