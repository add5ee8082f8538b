use crate::model::{Catalog, ParentContribution, PrintListEntry};
use crate::planner::Selection;
use std::collections::HashMap;
use tracing::debug;

/// Expands a selection into the list of files to print.
///
/// Selection entries are visited in order. Entries with a quantity below one
/// and ids missing from the catalog are skipped. Every sub-part of a selected
/// part is merged by file name, so the same file used by several parts shows
/// up once with one `parents` record per contributing part.
///
/// Declared part dependencies are not followed; see
/// [`crate::planner::unmet_dependencies`] for the advisory report.
///
/// # Example
///
/// ```
/// use marble_planner::model::Catalog;
/// use marble_planner::planner::{build_print_list, Selection};
///
/// let catalog = Catalog::default();
/// let mut selection = Selection::new();
/// selection.set("straight", 2);
/// assert!(build_print_list(&catalog, &selection).is_empty());
/// ```
#[must_use]
pub fn build_print_list(catalog: &Catalog, selection: &Selection) -> Vec<PrintListEntry> {
    let mut entries: Vec<PrintListEntry> = Vec::new();
    let mut by_name: HashMap<&str, usize> = HashMap::new();

    for (part_id, qty) in selection.selected() {
        let part = match catalog.find(part_id) {
            Some(p) => p,
            None => {
                debug!("Skipping unknown part id '{}'", part_id);
                continue;
            }
        };

        for sub_part in &part.sub_parts {
            let slot = *by_name.entry(sub_part.name.as_str()).or_insert_with(|| {
                entries.push(PrintListEntry {
                    name: sub_part.name.clone(),
                    metadata: sub_part.metadata.clone(),
                    count: 0,
                    parents: Vec::new(),
                });
                entries.len() - 1
            });

            let entry = &mut entries[slot];
            entry.count = entry.count.saturating_add(qty);
            entry.parents.push(ParentContribution {
                parent: part.name.clone(),
                count: qty,
            });
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_file_name;
    use crate::model::{Orientation, Part, PartMetadata, SubPart};
    use pretty_assertions::assert_eq;

    fn part(id: &str, name: &str, files: &[&str]) -> Part {
        Part {
            id: id.to_string(),
            name: name.to_string(),
            image: format!("images/{id}.png"),
            metadata: PartMetadata {
                orientation: Orientation::None,
                description: String::new(),
            },
            dependencies: Vec::new(),
            sub_parts: files
                .iter()
                .map(|f| SubPart {
                    id: crate::catalog::normalize_id(f),
                    name: (*f).to_string(),
                    metadata: parse_file_name(f),
                })
                .collect(),
        }
    }

    fn track_catalog() -> Catalog {
        Catalog::new(vec![
            part(
                "straight",
                "straight",
                &["straight-A.stl", "straight-A-support.stl"],
            ),
            part("curve", "curve", &["curve-A.stl"]),
            part("part-one", "PartOne", &["base-plate.stl", "one-arm.stl"]),
            part("part-two", "PartTwo", &["base-plate.stl"]),
        ])
    }

    fn parents(entry: &PrintListEntry) -> Vec<(&str, u64)> {
        entry
            .parents
            .iter()
            .map(|p| (p.parent.as_str(), p.count))
            .collect()
    }

    #[test]
    fn expands_parts_and_multiplies_by_quantity() {
        let catalog = track_catalog();
        let selection: Selection = [("straight", 2), ("curve", 3)].into_iter().collect();

        let list = build_print_list(&catalog, &selection);

        let names: Vec<&str> = list.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["straight-A.stl", "straight-A-support.stl", "curve-A.stl"]
        );
        assert_eq!(list[0].count, 2);
        assert_eq!(parents(&list[0]), vec![("straight", 2)]);
        assert_eq!(list[1].count, 2);
        assert!(list[1].metadata.support);
        assert!(!list[0].metadata.support);
        assert_eq!(list[2].count, 3);
        assert_eq!(parents(&list[2]), vec![("curve", 3)]);
    }

    #[test]
    fn merges_identical_file_names_across_parts() {
        let catalog = track_catalog();
        let selection: Selection = [("part-one", 2), ("part-two", 5)].into_iter().collect();

        let list = build_print_list(&catalog, &selection);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "base-plate.stl");
        assert_eq!(list[0].count, 7);
        assert_eq!(parents(&list[0]), vec![("PartOne", 2), ("PartTwo", 5)]);
        assert_eq!(list[1].name, "one-arm.stl");
        assert_eq!(list[1].count, 2);
    }

    #[test]
    fn parents_follow_selection_order() {
        let catalog = track_catalog();
        let selection: Selection = [("part-two", 1), ("part-one", 4)].into_iter().collect();

        let list = build_print_list(&catalog, &selection);

        assert_eq!(parents(&list[0]), vec![("PartTwo", 1), ("PartOne", 4)]);
    }

    #[test]
    fn zero_and_omitted_quantities_are_equivalent() {
        let catalog = track_catalog();
        let with_zero: Selection = [("curve", 0), ("straight", 1), ("part-two", -3)]
            .into_iter()
            .collect();
        let omitted: Selection = [("straight", 1)].into_iter().collect();

        assert_eq!(
            build_print_list(&catalog, &with_zero),
            build_print_list(&catalog, &omitted)
        );
    }

    #[test]
    fn unknown_part_ids_are_ignored() {
        let catalog = track_catalog();
        let selection: Selection = [("retired-part", 3), ("curve", 1)].into_iter().collect();

        let list = build_print_list(&catalog, &selection);

        assert_eq!(list.len(), 1);
        assert!(list
            .iter()
            .flat_map(|e| &e.parents)
            .all(|p| p.parent != "retired-part"));
    }

    #[test]
    fn counts_match_parents_and_selection_totals() {
        let catalog = track_catalog();
        let selection: Selection = [
            ("straight", 3),
            ("part-one", 2),
            ("curve", 0),
            ("part-two", 6),
            ("ghost", 9),
        ]
        .into_iter()
        .collect();

        let list = build_print_list(&catalog, &selection);

        for entry in &list {
            let from_parents: u64 = entry.parents.iter().map(|p| p.count).sum();
            assert_eq!(entry.count, from_parents, "{}", entry.name);
        }

        let expected: u64 = selection
            .selected()
            .filter_map(|(id, qty)| catalog.find(id).map(|p| qty * p.sub_parts.len() as u64))
            .sum();
        assert_eq!(crate::model::total_prints(&list), expected);
    }

    #[test]
    fn shared_file_with_huge_quantities_does_not_overflow() {
        let catalog = Catalog::new(vec![
            part("a", "A", &["base.stl"]),
            part("b", "B", &["base.stl"]),
            part("c", "C", &["base.stl"]),
        ]);
        let mut selection = Selection::new();
        for id in ["a", "b", "c"] {
            selection.set_raw(id, "9223372036854775807");
        }

        let list = build_print_list(&catalog, &selection);

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].count, 3 * u64::from(u32::MAX));
        let from_parents: u64 = list[0].parents.iter().map(|p| p.count).sum();
        assert_eq!(list[0].count, from_parents);
        assert_eq!(crate::model::total_prints(&list), list[0].count);
    }

    #[test]
    fn dependencies_are_not_expanded() {
        let mut catalog = track_catalog();
        catalog.parts[1].dependencies.push("straight".to_string());
        let selection: Selection = [("curve", 1)].into_iter().collect();

        let list = build_print_list(&catalog, &selection);

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "curve-A.stl");
    }

    #[test]
    fn empty_selection_gives_empty_list() {
        let catalog = track_catalog();
        assert!(build_print_list(&catalog, &Selection::new()).is_empty());
    }
}
