//! 排序清單讀取
//!
//! 排序清單為含標題列的 CSV，從指定欄位依列順序取出檔名

use crate::error::CollectError;
use log::{debug, info};
use std::path::Path;

pub const DEFAULT_MANIFEST_FILE_NAME: &str = "addresses.csv";
pub const DEFAULT_MANIFEST_COLUMN: &str = "File Name";

const UTF8_BOM: char = '\u{feff}';

/// 讀取排序清單中的檔名，略過空白欄位
pub fn read_order(manifest_path: &Path, column: &str) -> Result<Vec<String>, CollectError> {
    if !manifest_path.is_file() {
        return Err(CollectError::ManifestMissing {
            path: manifest_path.to_path_buf(),
        });
    }

    let read_error = |source: csv::Error| CollectError::ManifestRead {
        path: manifest_path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(manifest_path)
        .map_err(read_error)?;

    let column_index = reader
        .headers()
        .map_err(read_error)?
        .iter()
        .position(|header| header.trim_start_matches(UTF8_BOM) == column)
        .ok_or_else(|| CollectError::ManifestFormat {
            path: manifest_path.to_path_buf(),
            column: column.to_string(),
        })?;

    let mut order = Vec::new();
    for record in reader.records() {
        let record = record.map_err(read_error)?;
        match record.get(column_index) {
            Some(cell) if !cell.trim().is_empty() => order.push(cell.to_string()),
            _ => debug!("略過空白列: {:?}", record.position()),
        }
    }

    info!(
        "讀取排序清單 {} - {} 個檔名",
        manifest_path.display(),
        order.len()
    );

    Ok(order)
}
