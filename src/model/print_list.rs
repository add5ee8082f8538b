use super::SubPartMetadata;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentContribution {
    pub parent: String,
    pub count: u64,
}

/// One distinct sub-part in an aggregated print list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintListEntry {
    pub name: String,
    pub metadata: SubPartMetadata,
    pub count: u64,
    pub parents: Vec<ParentContribution>,
}

impl PrintListEntry {
    /// Parent cell as shown in exports: `"Straight (2); Curve (3)"`.
    #[must_use]
    pub fn parents_label(&self) -> String {
        self.parents
            .iter()
            .map(|p| format!("{} ({})", p.parent, p.count))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Total number of prints across a print list.
#[must_use]
pub fn total_prints(entries: &[PrintListEntry]) -> u64 {
    entries
        .iter()
        .map(|e| e.count)
        .fold(0, u64::saturating_add)
}
