mod path_validator;

pub use path_validator::{directory_label, ensure_directory_exists, validate_directory_exists};
