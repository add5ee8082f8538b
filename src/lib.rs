//! # Marble Planner
//!
//! Print planning for a modular marble run.
//!
//! ## Features
//!
//! - Build a parts catalog from a folder tree of STL files
//! - Infer print settings (support, brim, infill, colour) from file names
//! - Expand a part selection into a deduplicated print list
//! - Export the print list to CSV and JSON
//! - Interactive terminal planner
//!
//! ## Example
//!
//! ```no_run
//! use marble_planner::catalog::load_catalog;
//! use marble_planner::planner::{build_print_list, Selection};
//!
//! let catalog = load_catalog("data/parts-list.json").expect("Failed to load");
//! let mut selection = Selection::new();
//! selection.set("straight", 4);
//! for entry in build_print_list(&catalog, &selection) {
//!     println!("{} x{}", entry.name, entry.count);
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod export;
pub mod logging;
pub mod model;
pub mod planner;
pub mod ui;
