use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Layer categories of the original package structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Layer {
    Entities,
    Repositories,
    Services,
    Controllers,
    RequestDtos,
    ResponseDtos,
}

impl Layer {
    /// Default directory segment under the domain directory. Controllers use
    /// an explicit override sub-path from the mapping instead.
    pub fn sub_path(&self) -> &'static str {
        match self {
            Layer::Entities => "entities",
            Layer::Repositories => "repositories",
            Layer::Services => "services",
            Layer::Controllers => "controllers",
            Layer::RequestDtos => "dto/request",
            Layer::ResponseDtos => "dto/response",
        }
    }
}

/// One class entry flattened out of the domain mapping.
#[derive(Debug, Clone)]
pub struct MappingEntry {
    pub domain: String,
    pub class_name: String,
    pub layer: Layer,
    /// Destination sub-path relative to the source root, set for controllers.
    pub override_path: Option<String>,
}

/// Where a mapped class currently lives on disk.
#[derive(Debug, Clone)]
pub struct ClassLocation {
    pub path: PathBuf,
    pub package: String,
}

/// A mapped class that could not be resolved to exactly one source file.
/// Collected and surfaced in the run summary rather than aborting the scan.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Unresolved {
    NotFound {
        class_name: String,
    },
    Ambiguous {
        class_name: String,
        candidates: Vec<PathBuf>,
    },
    MissingPackageDeclaration {
        class_name: String,
        path: PathBuf,
    },
}

impl Unresolved {
    pub fn class_name(&self) -> &str {
        match self {
            Unresolved::NotFound { class_name }
            | Unresolved::Ambiguous { class_name, .. }
            | Unresolved::MissingPackageDeclaration { class_name, .. } => class_name,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Unresolved::NotFound { class_name } => {
                format!("{}: no matching source file found", class_name)
            }
            Unresolved::Ambiguous {
                class_name,
                candidates,
            } => format!(
                "{}: {} files match ({})",
                class_name,
                candidates.len(),
                candidates
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Unresolved::MissingPackageDeclaration { class_name, path } => format!(
                "{}: no package declaration in {}",
                class_name,
                path.display()
            ),
        }
    }
}

/// One planned relocation, the unit of work of a run.
#[derive(Debug, Clone)]
pub struct MoveOp {
    pub class_name: String,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub old_package: String,
    pub new_package: String,
}

impl MoveOp {
    /// Already migrated; planned as a skip so re-runs are no-ops.
    pub fn in_place(&self) -> bool {
        self.source == self.destination
    }

    pub fn old_fqn(&self) -> String {
        format!("{}.{}", self.old_package, self.class_name)
    }

    pub fn new_fqn(&self) -> String {
        format!("{}.{}", self.new_package, self.class_name)
    }
}

/// The validated unit of work for one run: every move plus every class that
/// could not be resolved.
#[derive(Debug, Clone, Default)]
pub struct MovePlan {
    pub ops: Vec<MoveOp>,
    pub unresolved: Vec<Unresolved>,
}

impl MovePlan {
    /// Ops that actually relocate a file.
    pub fn pending_moves(&self) -> impl Iterator<Item = &MoveOp> {
        self.ops.iter().filter(|op| !op.in_place())
    }

    pub fn pending_count(&self) -> usize {
        self.pending_moves().count()
    }

    pub fn in_place_count(&self) -> usize {
        self.ops.len() - self.pending_count()
    }

    /// Old FQN -> new FQN for every op that changes a package.
    pub fn rename_table(&self) -> HashMap<String, String> {
        self.pending_moves()
            .filter(|op| op.old_package != op.new_package)
            .map(|op| (op.old_fqn(), op.new_fqn()))
            .collect()
    }
}

/// Accumulated counts for the end-of-run report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub dry_run: bool,
    pub planned_moves: usize,
    pub files_moved: usize,
    pub files_in_place: usize,
    pub imports_rewritten: usize,
    pub files_rewritten: usize,
    pub unresolved: Vec<Unresolved>,
}

impl RunSummary {
    pub fn from_plan(plan: &MovePlan, dry_run: bool) -> Self {
        Self {
            dry_run,
            planned_moves: plan.pending_count(),
            files_in_place: plan.in_place_count(),
            unresolved: plan.unresolved.clone(),
            ..Default::default()
        }
    }

    /// True when every mapped class was resolved.
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(source: &str, destination: &str, old_package: &str, new_package: &str) -> MoveOp {
        MoveOp {
            class_name: "Contact".to_string(),
            source: PathBuf::from(source),
            destination: PathBuf::from(destination),
            old_package: old_package.to_string(),
            new_package: new_package.to_string(),
        }
    }

    #[test]
    fn test_in_place_op_excluded_from_rename_table() {
        let plan = MovePlan {
            ops: vec![
                op(
                    "root/entities/Contact.java",
                    "root/customer/entities/Contact.java",
                    "com.skillbridge.entities",
                    "com.skillbridge.customer.entities",
                ),
                op(
                    "root/customer/entities/Contact.java",
                    "root/customer/entities/Contact.java",
                    "com.skillbridge.customer.entities",
                    "com.skillbridge.customer.entities",
                ),
            ],
            unresolved: vec![],
        };

        assert_eq!(plan.pending_count(), 1);
        assert_eq!(plan.in_place_count(), 1);

        let table = plan.rename_table();
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get("com.skillbridge.entities.Contact").map(String::as_str),
            Some("com.skillbridge.customer.entities.Contact")
        );
    }

    #[test]
    fn test_fqn_helpers() {
        let op = op("a/Contact.java", "b/Contact.java", "com.a", "com.b");
        assert_eq!(op.old_fqn(), "com.a.Contact");
        assert_eq!(op.new_fqn(), "com.b.Contact");
        assert!(!op.in_place());
    }
}
