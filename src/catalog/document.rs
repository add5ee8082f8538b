use crate::error::LoadError;
use crate::model::{Catalog, Kit};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

/// Reads a catalog document written by [`crate::export::write_catalog`].
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
    let catalog: Catalog = read_json(path.as_ref())?;
    debug!(
        "Loaded {} parts ({} sub-parts) from {}",
        catalog.total_parts(),
        catalog.total_sub_parts(),
        path.as_ref().display()
    );
    Ok(catalog)
}

/// Reads a kit document: a JSON array of `{id, name, parts: [{part_id, qty}]}`.
pub fn load_kits<P: AsRef<Path>>(path: P) -> Result<Vec<Kit>, LoadError> {
    let kits: Vec<Kit> = read_json(path.as_ref())?;
    debug!("Loaded {} kits from {}", kits.len(), path.as_ref().display());
    Ok(kits)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColorType, Orientation};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn loads_catalog_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("parts-list.json");
        std::fs::write(
            &path,
            r#"[
    {
        "id": "orbit-left",
        "name": "Orbit - Left",
        "image": "images/orbit.png",
        "metadata": { "orientation": "left", "description": "Round." },
        "dependencies": ["orbit-return-left"],
        "sub_parts": [
            {
                "id": "ring-b-stl",
                "name": "ring-B.stl",
                "metadata": {
                    "support": false,
                    "brim": true,
                    "optional": false,
                    "color_type": "B",
                    "infill": "20%"
                }
            }
        ]
    }
]"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        let part = catalog.find("orbit-left").unwrap();
        assert_eq!(part.metadata.orientation, Orientation::Left);
        assert_eq!(part.dependencies, vec!["orbit-return-left".to_string()]);
        assert_eq!(part.sub_parts[0].metadata.color_type, ColorType::B);
        assert!(part.sub_parts[0].metadata.brim);
    }

    #[test]
    fn loads_kits_with_missing_parts_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kits.json");
        std::fs::write(
            &path,
            r#"[
                {"id": "starter", "name": "Starter", "parts": [{"part_id": "straight", "qty": 4}]},
                {"id": "empty", "name": "Empty"}
            ]"#,
        )
        .unwrap();

        let kits = load_kits(&path).unwrap();
        assert_eq!(kits.len(), 2);
        assert_eq!(kits[0].parts[0].qty, 4);
        assert!(kits[1].parts.is_empty());
    }

    #[test]
    fn reports_missing_and_malformed_documents() {
        let dir = TempDir::new().unwrap();
        let missing = load_catalog(dir.path().join("none.json")).unwrap_err();
        assert!(matches!(missing, LoadError::FileRead { .. }));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        let malformed = load_catalog(&bad).unwrap_err();
        assert!(matches!(malformed, LoadError::Json { .. }));
    }
}
