//! 收集流程的錯誤類型

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// 未提供的輸入
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    SourceRoot,
    DestinationRoot,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceRoot => write!(f, "來源資料夾"),
            Self::DestinationRoot => write!(f, "目的資料夾"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("未選擇{input}")]
    MissingInput { input: InputKind },

    #[error("路徑不存在或不是資料夾: {}", path.display())]
    InvalidDirectory { path: PathBuf },

    #[error("找不到排序清單: {}", path.display())]
    ManifestMissing { path: PathBuf },

    #[error("排序清單 {} 缺少欄位 \"{column}\"", path.display())]
    ManifestFormat { path: PathBuf, column: String },

    #[error("無法讀取排序清單 {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("無法讀取來源資料夾 {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("無法建立目的資料夾 {}: {source}", path.display())]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("複製檔案失敗: {} -> {}: {source}", source_path.display(), target_path.display())]
    CopyFailed {
        source_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
