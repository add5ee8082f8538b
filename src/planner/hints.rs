use crate::model::Catalog;
use crate::planner::Selection;
use std::fmt;

/// A selected part whose declared companion part is not selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingDependency {
    pub part_id: String,
    pub part_name: String,
    pub dependency_id: String,
    /// Display name of the dependency, if the catalog knows it.
    pub dependency_name: Option<String>,
}

impl fmt::Display for MissingDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dependency = self
            .dependency_name
            .as_deref()
            .unwrap_or(&self.dependency_id);
        write!(f, "{} also needs {}", self.part_name, dependency)
    }
}

/// Lists declared dependencies of selected parts that are not selected.
///
/// Purely advisory. The print list never pulls dependencies in on its own.
#[must_use]
pub fn unmet_dependencies(catalog: &Catalog, selection: &Selection) -> Vec<MissingDependency> {
    let mut missing = Vec::new();

    for (part_id, _) in selection.selected() {
        let part = match catalog.find(part_id) {
            Some(p) => p,
            None => continue,
        };

        for dependency in &part.dependencies {
            if selection.is_selected(dependency) {
                continue;
            }
            missing.push(MissingDependency {
                part_id: part.id.clone(),
                part_name: part.name.clone(),
                dependency_id: dependency.clone(),
                dependency_name: catalog.find(dependency).map(|d| d.name.clone()),
            });
        }
    }

    missing
}
