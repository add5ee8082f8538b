pub mod aggregate;
pub mod hints;
pub mod selection;

pub use aggregate::build_print_list;
pub use hints::{unmet_dependencies, MissingDependency};
pub use selection::{Selection, MAX_QUANTITY};
