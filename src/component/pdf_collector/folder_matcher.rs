//! 「Complete」資料夾名稱比對

/// 可接受的資料夾名稱前綴（區分大小寫）
pub const COMPLETE_FOLDER_PREFIXES: [&str; 6] = [
    "Complete",
    "Complete ",
    "Completed",
    "complete",
    "complete ",
    "completed",
];

#[must_use]
pub fn is_complete_folder(name: &str) -> bool {
    COMPLETE_FOLDER_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}
