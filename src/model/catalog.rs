use super::Part;
use serde::{Deserialize, Serialize};

/// The parts catalog document: an ordered sequence of parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub parts: Vec<Part>,
}

impl Catalog {
    #[must_use]
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn total_parts(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn total_sub_parts(&self) -> usize {
        self.parts.iter().map(|p| p.sub_parts.len()).sum()
    }
}
