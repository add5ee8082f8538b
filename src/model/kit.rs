use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitPart {
    pub part_id: String,
    pub qty: u32,
}

/// Named preset selection, read from an external kit document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parts: Vec<KitPart>,
}
