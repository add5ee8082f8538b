pub mod builder;
pub mod document;
pub mod normalize;
pub mod rules;

pub use crate::error::{BuildError, LoadError};
pub use builder::{build_catalog, BuildOptions, BuildSummary, DEFAULT_IMAGE_DIR};
pub use document::{load_catalog, load_kits};
pub use normalize::normalize_id;
pub use rules::{describe, image_key, parse_file_name};
