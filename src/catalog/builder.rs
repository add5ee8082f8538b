use crate::catalog::normalize_id;
use crate::catalog::rules::{apply_dependencies, describe, image_key, parse_file_name};
use crate::error::BuildError;
use crate::model::{Catalog, Orientation, Part, PartMetadata, SubPart};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const DEFAULT_IMAGE_DIR: &str = "images";

#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory prefix written into each part's `image` field.
    pub image_dir: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub families: usize,
    pub parts: usize,
    pub sub_parts: usize,
}

/// Entry of a parts directory, hidden names already filtered out.
#[derive(Debug)]
struct DirEntry {
    name: String,
    path: PathBuf,
    is_dir: bool,
    is_file: bool,
}

/// Part family directory and the variant directories found inside it.
#[derive(Debug)]
struct Family {
    name: String,
    path: PathBuf,
    variants: Vec<DirEntry>,
}

/// Builds the parts catalog from a directory tree.
///
/// The root holds one directory per part family. A family either contains
/// the printable files directly, or one directory per variant (for example
/// `Left` / `Right`) holding the files. Each variant becomes its own part.
///
/// Entries are visited in file name order, so the same tree always produces
/// the same catalog. Any I/O error aborts the build.
///
/// # Errors
///
/// Returns [`BuildError::MissingRoot`] or [`BuildError::NotADirectory`] for a
/// bad root, and [`BuildError::ReadDir`] / [`BuildError::Metadata`] when the
/// traversal fails.
///
/// # Example
///
/// ```no_run
/// use marble_planner::catalog::{build_catalog, BuildOptions};
///
/// let catalog = build_catalog("stl", &BuildOptions::default())?;
/// println!("{} parts", catalog.total_parts());
/// # Ok::<(), marble_planner::error::BuildError>(())
/// ```
pub fn build_catalog<P: AsRef<Path>>(
    root: P,
    options: &BuildOptions,
) -> Result<Catalog, BuildError> {
    let root = root.as_ref();
    check_root(root)?;

    let families = scan_families(root)?;
    let total_files = count_files(&families)?;
    info!(
        "Found {} part families with {} files in {}",
        families.len(),
        total_files,
        root.display()
    );

    let mut parts = Vec::new();
    let mut processed_files = 0;

    for family in &families {
        if family.variants.is_empty() {
            let part = build_part(&family.name, None, &family.path, options)?;
            processed_files += part.sub_parts.len();
            parts.push(part);
        } else {
            for variant in &family.variants {
                let part = build_part(
                    &family.name,
                    Some(variant.name.as_str()),
                    &variant.path,
                    options,
                )?;
                processed_files += part.sub_parts.len();
                parts.push(part);
            }
        }

        info!(
            "Processed: {}/{} ({:.2}%)",
            processed_files,
            total_files,
            progress_percent(processed_files, total_files)
        );
    }

    apply_dependencies(&mut parts);

    for id in duplicate_ids(parts.iter().map(|p| p.id.as_str())) {
        warn!("Duplicate part id '{}', only the first is reachable by id", id);
    }

    let catalog = Catalog::new(parts);
    let summary = BuildSummary {
        families: families.len(),
        parts: catalog.total_parts(),
        sub_parts: catalog.total_sub_parts(),
    };
    info!(
        families = summary.families,
        parts = summary.parts,
        sub_parts = summary.sub_parts,
        "Catalog built"
    );

    Ok(catalog)
}

fn check_root(root: &Path) -> Result<(), BuildError> {
    if !root.exists() {
        return Err(BuildError::MissingRoot {
            path: root.to_path_buf(),
        });
    }
    let metadata = fs::metadata(root).map_err(|source| BuildError::Metadata {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(BuildError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}

fn scan_families(root: &Path) -> Result<Vec<Family>, BuildError> {
    let mut families = Vec::new();

    for entry in list_visible(root)? {
        if !entry.is_dir {
            debug!("Skipping loose file {}", entry.path.display());
            continue;
        }
        let variants: Vec<DirEntry> = list_visible(&entry.path)?
            .into_iter()
            .filter(|e| e.is_dir)
            .collect();
        families.push(Family {
            name: entry.name,
            path: entry.path,
            variants,
        });
    }

    Ok(families)
}

fn count_files(families: &[Family]) -> Result<usize, BuildError> {
    let mut total = 0;
    for family in families {
        if family.variants.is_empty() {
            total += list_files(&family.path)?.len();
        } else {
            for variant in &family.variants {
                total += list_files(&variant.path)?.len();
            }
        }
    }
    Ok(total)
}

fn build_part(
    family: &str,
    variant: Option<&str>,
    dir: &Path,
    options: &BuildOptions,
) -> Result<Part, BuildError> {
    let family_label = family.replace(['_', '-'], " ");
    let (id, name, orientation) = match variant {
        Some(variant) => (
            normalize_id(&format!("{family}-{variant}")),
            format!("{family_label} - {variant}"),
            Orientation::from_variant(variant),
        ),
        None => (normalize_id(family), family_label, Orientation::None),
    };

    let sub_parts: Vec<SubPart> = list_files(dir)?
        .into_iter()
        .map(|file| SubPart {
            id: normalize_id(&file.name),
            metadata: parse_file_name(&file.name),
            name: file.name,
        })
        .collect();

    debug!("Part '{}' with {} sub-parts", id, sub_parts.len());
    for sub_id in duplicate_ids(sub_parts.iter().map(|s| s.id.as_str())) {
        warn!("Part '{}' has duplicate sub-part id '{}'", id, sub_id);
    }

    Ok(Part {
        image: image_path(&options.image_dir, image_key(&id)),
        metadata: PartMetadata {
            orientation,
            description: describe(&id).to_string(),
        },
        id,
        name,
        dependencies: Vec::new(),
        sub_parts,
    })
}

/// Ids that occur more than once, each reported once in first-repeat order.
fn duplicate_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    ids.into_iter()
        .filter(|id| !seen.insert(*id) && reported.insert(*id))
        .collect()
}

fn image_path(image_dir: &str, key: &str) -> String {
    let dir = image_dir.trim_end_matches('/');
    if dir.is_empty() {
        format!("{key}.png")
    } else {
        format!("{dir}/{key}.png")
    }
}

fn progress_percent(done: usize, total: usize) -> f64 {
    if total == 0 {
        100.0
    } else {
        done as f64 / total as f64 * 100.0
    }
}

fn list_files(dir: &Path) -> Result<Vec<DirEntry>, BuildError> {
    Ok(list_visible(dir)?.into_iter().filter(|e| e.is_file).collect())
}

fn list_visible(dir: &Path) -> Result<Vec<DirEntry>, BuildError> {
    let read_dir = fs::read_dir(dir).map_err(|source| BuildError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| BuildError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        // Follows symlinks, so linked folders count as folders.
        let metadata = fs::metadata(&path).map_err(|source| BuildError::Metadata {
            path: path.clone(),
            source,
        })?;

        entries.push(DirEntry {
            name,
            path,
            is_dir: metadata.is_dir(),
            is_file: metadata.is_file(),
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
