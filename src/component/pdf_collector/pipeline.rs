//! 收集流程
//!
//! 串接收集、排序與複製三個階段。每次執行互不影響，不保留任何狀態。

use super::collector::{CollectionMode, collect_with_mode};
use super::copy_executor::{ProgressEvent, execute};
use super::manifest_reader::{DEFAULT_MANIFEST_COLUMN, DEFAULT_MANIFEST_FILE_NAME, read_order};
use super::order_resolver::{OrderedBatch, resolve};
use crate::config::UserSettings;
use crate::error::{CollectError, InputKind};
use crate::tools::{directory_label, validate_directory_exists};
use log::info;
use std::path::{Path, PathBuf};

/// 排序清單設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestOptions {
    /// 指定清單路徑；未指定時使用 `{source_root}/{file_name}`
    pub path: Option<PathBuf>,
    pub file_name: String,
    pub column: String,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            path: None,
            file_name: DEFAULT_MANIFEST_FILE_NAME.to_string(),
            column: DEFAULT_MANIFEST_COLUMN.to_string(),
        }
    }
}

impl ManifestOptions {
    #[must_use]
    pub fn resolve_path(&self, source_root: &Path) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| source_root.join(&self.file_name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectOptions {
    pub mode: CollectionMode,
    /// `None` 表示不使用排序清單
    pub manifest: Option<ManifestOptions>,
}

impl CollectOptions {
    #[must_use]
    pub fn from_settings(settings: &UserSettings) -> Self {
        let manifest = settings.ordering_enabled.then(|| ManifestOptions {
            path: None,
            file_name: settings.manifest_file_name.clone(),
            column: settings.manifest_column.clone(),
        });

        Self {
            mode: settings.collection_mode,
            manifest,
        }
    }
}

/// 單次執行的輸入
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    pub source_root: Option<PathBuf>,
    pub destination_root: Option<PathBuf>,
    pub options: CollectOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed {
        destination: PathBuf,
        file_count: usize,
    },
    /// 沒有找到任何 PDF，未建立目的資料夾
    NoMatchesFound,
}

pub fn require_input(path: Option<&Path>, input: InputKind) -> Result<&Path, CollectError> {
    path.ok_or(CollectError::MissingInput { input })
}

/// 收集 PDF 並依設定排序
pub fn prepare_batch(
    source_root: &Path,
    options: &CollectOptions,
) -> Result<OrderedBatch, CollectError> {
    validate_directory_exists(source_root)?;

    let order = match &options.manifest {
        Some(manifest) => read_order(&manifest.resolve_path(source_root), &manifest.column)?,
        None => Vec::new(),
    };

    info!(
        "收集方式: {}，排序清單: {} 個項目",
        options.mode,
        order.len()
    );

    let collected = collect_with_mode(source_root, options.mode)?;
    Ok(resolve(collected, &order))
}

/// 將批次複製到 `destination_root` 下的新資料夾
///
/// 批次為空時不建立資料夾，回傳 [`RunOutcome::NoMatchesFound`]。
pub fn copy_batch<F>(
    batch: &OrderedBatch,
    source_root: &Path,
    destination_root: &Path,
    on_progress: F,
) -> Result<RunOutcome, CollectError>
where
    F: FnMut(&ProgressEvent),
{
    if batch.is_empty() {
        return Ok(RunOutcome::NoMatchesFound);
    }

    validate_directory_exists(destination_root)?;

    let destination = execute(
        batch,
        destination_root,
        &directory_label(source_root),
        on_progress,
    )?;

    Ok(RunOutcome::Completed {
        destination,
        file_count: batch.len(),
    })
}

/// 一次完成整個流程
pub fn run<F>(request: &RunRequest, on_progress: F) -> Result<RunOutcome, CollectError>
where
    F: FnMut(&ProgressEvent),
{
    let source_root = require_input(request.source_root.as_deref(), InputKind::SourceRoot)?;
    let destination_root =
        require_input(request.destination_root.as_deref(), InputKind::DestinationRoot)?;

    let batch = prepare_batch(source_root, &request.options)?;
    copy_batch(&batch, source_root, destination_root, on_progress)
}
