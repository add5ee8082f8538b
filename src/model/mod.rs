pub mod catalog;
pub mod kit;
pub mod part;
pub mod print_list;

pub use catalog::Catalog;
pub use kit::{Kit, KitPart};
pub use part::{ColorType, Orientation, Part, PartMetadata, SubPart, SubPartMetadata};
pub use print_list::{total_prints, ParentContribution, PrintListEntry};
