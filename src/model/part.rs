use serde::{Deserialize, Serialize};

/// Infill used when a filename carries no infill marker.
pub const DEFAULT_INFILL: &str = "15%";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Left,
    Right,
    #[default]
    None,
}

impl Orientation {
    /// Classifies a variant directory name. "left" wins when both appear.
    #[must_use]
    pub fn from_variant(variant: &str) -> Self {
        let lower = variant.to_lowercase();
        if lower.contains("left") {
            Self::Left
        } else if lower.contains("right") {
            Self::Right
        } else {
            Self::None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorType {
    #[default]
    A,
    B,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartMetadata {
    pub orientation: Orientation,
    pub description: String,
}

/// A buildable catalog entry: a part family, or one orientation variant of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: String,
    pub name: String,
    pub image: String,
    pub metadata: PartMetadata,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub sub_parts: Vec<SubPart>,
}

impl Part {
    /// Appends a dependency unless it is already declared.
    pub fn add_dependency(&mut self, id: &str) {
        if !self.dependencies.iter().any(|d| d == id) {
            self.dependencies.push(id.to_string());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubPartMetadata {
    pub support: bool,
    pub brim: bool,
    pub optional: bool,
    pub color_type: ColorType,
    pub infill: String,
}

impl Default for SubPartMetadata {
    fn default() -> Self {
        Self {
            support: false,
            brim: false,
            optional: false,
            color_type: ColorType::A,
            infill: DEFAULT_INFILL.to_string(),
        }
    }
}

/// One printable file. `name` is the file name as found on disk and is the
/// key under which identical prints from different parts are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubPart {
    pub id: String,
    pub name: String,
    pub metadata: SubPartMetadata,
}
