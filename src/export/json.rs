use crate::error::ExportError;
use crate::model::{Catalog, PrintListEntry};
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes the catalog document.
///
/// The JSON is written next to the target as `<path>.tmp` and renamed into
/// place, so a failed write never leaves a partial catalog behind.
pub fn write_catalog<P: AsRef<Path>>(catalog: &Catalog, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = to_pretty_json(catalog)?;

    if let Some(parent) = path_ref.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::FileCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let tmp_path = tmp_path_for(path_ref);
    if let Err(e) = write_file(&tmp_path, &json) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path_ref).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        ExportError::Rename {
            from: tmp_path.clone(),
            to: path_ref.to_path_buf(),
            source,
        }
    })?;

    debug!("Wrote {} bytes to {}", json.len(), path_ref.display());
    Ok(())
}

pub fn export_json<P: AsRef<Path>>(entries: &[PrintListEntry], path: P) -> Result<(), ExportError> {
    let json = to_pretty_json(entries)?;
    write_file(path.as_ref(), &json)
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let mut file = File::create(path).map_err(|source| ExportError::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(bytes).map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Orientation, Part, PartMetadata, SubPart, SubPartMetadata};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn catalog() -> Catalog {
        Catalog::new(vec![Part {
            id: "curve".to_string(),
            name: "curve".to_string(),
            image: "images/curve.png".to_string(),
            metadata: PartMetadata {
                orientation: Orientation::None,
                description: "Gently redirect your marble to the next section.".to_string(),
            },
            dependencies: Vec::new(),
            sub_parts: vec![SubPart {
                id: "curve-a-stl".to_string(),
                name: "curve-A.stl".to_string(),
                metadata: SubPartMetadata::default(),
            }],
        }])
    }

    #[test]
    fn catalog_document_uses_four_space_indent_and_field_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("parts-list.json");

        write_catalog(&catalog(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n    {\n        \"id\": \"curve\","));
        assert!(text.contains("\"orientation\": \"none\""));
        assert!(text.contains("\"sub_parts\": ["));
        assert!(text.contains("\"color_type\": \"A\""));
        assert!(!tmp_path_for(&path).exists());
    }

    #[test]
    fn catalog_round_trips_through_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("parts-list.json");

        write_catalog(&catalog(), &path).unwrap();
        let loaded = crate::catalog::load_catalog(&path).unwrap();

        assert_eq!(loaded, catalog());
    }

    #[test]
    fn failed_write_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        // The target is an existing directory, so the final rename fails.
        let path = dir.path().join("occupied");
        fs::create_dir_all(path.join("child")).unwrap();

        let err = write_catalog(&catalog(), &path).unwrap_err();

        assert!(matches!(err, ExportError::Rename { .. }));
        assert!(!tmp_path_for(&path).exists());
        assert!(path.is_dir());
    }

    #[test]
    fn print_list_json_is_an_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("print-list.json");

        export_json(&[], &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
