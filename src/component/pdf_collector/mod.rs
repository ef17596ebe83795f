//! PDF 收集元件
//!
//! 從各子資料夾的「Complete」資料夾收集 PDF，加上子資料夾前綴後
//! 複製到單一目的資料夾

mod collector;
mod copy_executor;
mod folder_matcher;
mod main;
mod manifest_reader;
mod order_resolver;
pub mod pipeline;

pub use collector::{
    CollectedFile, CollectionMode, TARGET_NAME_SEPARATOR, collect, collect_legacy,
    collect_with_mode, is_pdf_file_name, target_name_for,
};
pub use copy_executor::{ProgressEvent, destination_folder_name, execute};
pub use folder_matcher::{COMPLETE_FOLDER_PREFIXES, is_complete_folder};
pub use main::PdfCollector;
pub use manifest_reader::{DEFAULT_MANIFEST_COLUMN, DEFAULT_MANIFEST_FILE_NAME, read_order};
pub use order_resolver::{OrderedBatch, resolve};
pub use pipeline::{CollectOptions, ManifestOptions, RunOutcome, RunRequest};
