use crate::component::pdf_collector::{
    CollectionMode, DEFAULT_MANIFEST_COLUMN, DEFAULT_MANIFEST_FILE_NAME,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 最近使用路徑的保留數量
pub const MAX_RECENT_PATHS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::EnUs, Self::ZhTw];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhTw => "zh-TW",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnUs => write!(f, "English"),
            Self::ZhTw => write!(f, "繁體中文"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub language: Language,
    pub collection_mode: CollectionMode,
    /// 是否依排序清單篩選檔案
    pub ordering_enabled: bool,
    pub manifest_file_name: String,
    pub manifest_column: String,
    pub recent_source_paths: Vec<String>,
    pub recent_destination_paths: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            collection_mode: CollectionMode::default(),
            ordering_enabled: false,
            manifest_file_name: DEFAULT_MANIFEST_FILE_NAME.to_string(),
            manifest_column: DEFAULT_MANIFEST_COLUMN.to_string(),
            recent_source_paths: Vec::new(),
            recent_destination_paths: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: UserSettings,
}
