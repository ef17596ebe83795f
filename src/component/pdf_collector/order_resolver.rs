//! 排序合併
//!
//! 將收集結果與排序清單合併成最終要複製的批次

use super::collector::CollectedFile;
use log::{debug, info};

/// 依序複製的檔案批次
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedBatch {
    files: Vec<CollectedFile>,
}

impl OrderedBatch {
    #[must_use]
    pub fn files(&self) -> &[CollectedFile] {
        &self.files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CollectedFile> {
        self.files.iter()
    }
}

/// 合併收集結果與排序清單
///
/// 清單為空時保留所有檔案。清單不為空時只保留清單中出現的檔名，
/// 每個清單項目對應第一個尚未使用、原始檔名相同的檔案。
/// 兩種情況最後都依 `target_name` 排序，清單只決定保留哪些檔案。
#[must_use]
pub fn resolve(collected: Vec<CollectedFile>, order: &[String]) -> OrderedBatch {
    let mut files = if order.is_empty() {
        collected
    } else {
        select_listed(collected, order)
    };

    files.sort_by(|a, b| a.target_name.cmp(&b.target_name));

    info!("排序完成，批次共 {} 個檔案", files.len());

    OrderedBatch { files }
}

fn select_listed(collected: Vec<CollectedFile>, order: &[String]) -> Vec<CollectedFile> {
    let total = collected.len();
    let mut pool: Vec<Option<CollectedFile>> = collected.into_iter().map(Some).collect();
    let mut selected = Vec::with_capacity(order.len().min(total));

    for name in order {
        let slot = pool
            .iter_mut()
            .find(|slot| {
                slot.as_ref()
                    .is_some_and(|f| f.original_name() == name.as_str())
            });

        match slot.and_then(Option::take) {
            Some(file) => selected.push(file),
            None => debug!("排序清單項目沒有對應檔案: {name}"),
        }
    }

    info!(
        "排序清單符合 {} 個檔案，排除 {} 個",
        selected.len(),
        total - selected.len()
    );

    selected
}
