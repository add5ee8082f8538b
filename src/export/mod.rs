pub mod csv;
pub mod json;

pub use self::csv::{export_csv, write_csv, PRINT_LIST_HEADERS};
pub use self::json::{export_json, write_catalog};
pub use crate::error::ExportError;
