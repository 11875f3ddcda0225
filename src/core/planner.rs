use crate::config::mapping::DomainMapping;
use crate::core::locator::{ClassIndex, Resolution};
use crate::domain::model::{MoveOp, MovePlan};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ReorgError, Result};
use std::collections::HashMap;
use std::path::PathBuf;

/// Build the full move plan for a run. This is the correctness gate: every
/// destination conflict is detected here, before anything on disk changes.
pub fn build_plan<C: ConfigProvider>(
    mapping: &DomainMapping,
    index: &ClassIndex,
    config: &C,
) -> Result<MovePlan> {
    let mut plan = MovePlan::default();

    for entry in mapping.entries(config.domain_filter())? {
        let location = match index.resolve(&entry.class_name)? {
            Resolution::Found(location) => location,
            Resolution::Unresolved(unresolved) => {
                tracing::warn!("Skipping {}", unresolved.describe());
                plan.unresolved.push(unresolved);
                continue;
            }
        };

        // Controllers land at their explicit sub-path; everything else at
        // <domain>/<layer>.
        let sub_path = entry
            .override_path
            .clone()
            .unwrap_or_else(|| format!("{}/{}", entry.domain, entry.layer.sub_path()));

        let destination = config
            .source_root()
            .join(&sub_path)
            .join(format!("{}.{}", entry.class_name, config.source_extension()));
        let new_package = format!("{}.{}", config.base_package(), sub_path.replace('/', "."));

        plan.ops.push(MoveOp {
            class_name: entry.class_name,
            source: location.path,
            destination,
            old_package: location.package,
            new_package,
        });
    }

    check_conflicts(&plan)?;
    Ok(plan)
}

fn check_conflicts(plan: &MovePlan) -> Result<()> {
    let mut claimed: HashMap<&PathBuf, &str> = HashMap::new();

    for op in &plan.ops {
        if let Some(previous) = claimed.insert(&op.destination, &op.class_name) {
            return Err(ReorgError::PlanConflictError {
                destination: op.destination.clone(),
                first: previous.to_string(),
                second: op.class_name.clone(),
            });
        }

        // A pre-existing file at the destination that is not the class's own
        // source would be silently clobbered by the move.
        if !op.in_place() && op.destination.exists() {
            return Err(ReorgError::DestinationOccupiedError {
                destination: op.destination.clone(),
                class_name: op.class_name.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::mapping::DomainMapping;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    struct TestConfig {
        root: PathBuf,
    }

    impl ConfigProvider for TestConfig {
        fn source_root(&self) -> &Path {
            &self.root
        }
        fn base_package(&self) -> &str {
            "com.skillbridge"
        }
        fn source_extension(&self) -> &str {
            "java"
        }
        fn domain_filter(&self) -> Option<&str> {
            None
        }
        fn dry_run(&self) -> bool {
            false
        }
    }

    fn write(root: &Path, rel: &str, package: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let class = path.file_stem().unwrap().to_str().unwrap().to_string();
        fs::write(path, format!("package {};\n\npublic class {} {{}}\n", package, class)).unwrap();
    }

    fn mapping() -> DomainMapping {
        DomainMapping::from_toml_str(
            r#"
            [customer]
            entities = ["Contact"]
            [customer.controllers]
            ContactController = "public/customer"
            [customer.dtos]
            response = ["ContactDetailDTO"]
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_destination_paths_and_packages() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_path_buf();
        write(&root, "entities/Contact.java", "com.skillbridge.entities");
        write(&root, "controllers/ContactController.java", "com.skillbridge.controllers");
        write(&root, "dtos/ContactDetailDTO.java", "com.skillbridge.dtos");

        let config = TestConfig { root: root.clone() };
        let index = ClassIndex::build(&root, "java").unwrap();
        let plan = build_plan(&mapping(), &index, &config).unwrap();

        assert_eq!(plan.ops.len(), 3);
        assert!(plan.unresolved.is_empty());

        let by_name: HashMap<&str, &MoveOp> = plan
            .ops
            .iter()
            .map(|op| (op.class_name.as_str(), op))
            .collect();

        let entity = by_name["Contact"];
        assert_eq!(entity.destination, root.join("customer/entities/Contact.java"));
        assert_eq!(entity.new_package, "com.skillbridge.customer.entities");

        // Controller override replaces the domain/layer default entirely
        let controller = by_name["ContactController"];
        assert_eq!(
            controller.destination,
            root.join("public/customer/ContactController.java")
        );
        assert_eq!(controller.new_package, "com.skillbridge.public.customer");

        let dto = by_name["ContactDetailDTO"];
        assert_eq!(
            dto.destination,
            root.join("customer/dto/response/ContactDetailDTO.java")
        );
        assert_eq!(dto.new_package, "com.skillbridge.customer.dto.response");
    }

    #[test]
    fn test_unresolved_classes_do_not_abort_planning() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_path_buf();
        write(&root, "entities/Contact.java", "com.skillbridge.entities");

        let config = TestConfig { root: root.clone() };
        let index = ClassIndex::build(&root, "java").unwrap();
        let plan = build_plan(&mapping(), &index, &config).unwrap();

        assert_eq!(plan.ops.len(), 1);
        assert_eq!(plan.unresolved.len(), 2);
    }

    #[test]
    fn test_occupied_destination_is_a_plan_conflict() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_path_buf();
        write(&root, "entities/Contact.java", "com.skillbridge.entities");
        // Unrelated file already sitting at the computed destination
        write(&root, "customer/entities/Contact.java", "com.other");

        let config = TestConfig { root: root.clone() };
        let mapping = DomainMapping::from_toml_str(
            r#"
            [customer]
            entities = ["Contact"]
            "#,
        )
        .unwrap();

        // Both files share the stem, so a whole-tree index would call this
        // ambiguous; index only the layer directory to hit the occupancy check.
        let index = ClassIndex::build(&root.join("entities"), "java").unwrap();
        let err = build_plan(&mapping, &index, &config).unwrap_err();
        assert!(matches!(err, ReorgError::DestinationOccupiedError { .. }));
    }

    #[test]
    fn test_duplicate_planned_destination_is_a_plan_conflict() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_path_buf();
        write(&root, "entities/Contact.java", "com.skillbridge.entities");

        let config = TestConfig { root: root.clone() };
        let index = ClassIndex::build(&root, "java").unwrap();
        // Mapping validation would reject the duplicate; the gate must hold
        // on its own because build_plan does not validate
        let mapping = DomainMapping::from_toml_str(
            r#"
            [customer]
            entities = ["Contact", "Contact"]
            "#,
        )
        .unwrap();

        let err = build_plan(&mapping, &index, &config).unwrap_err();
        assert!(matches!(err, ReorgError::PlanConflictError { .. }));

        // Zero filesystem mutation
        assert!(root.join("entities/Contact.java").exists());
        assert!(!root.join("customer/entities/Contact.java").exists());
    }

    #[test]
    fn test_class_already_at_destination_plans_as_in_place() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_path_buf();
        write(
            &root,
            "customer/entities/Contact.java",
            "com.skillbridge.customer.entities",
        );

        let config = TestConfig { root: root.clone() };
        let index = ClassIndex::build(&root, "java").unwrap();
        let mapping = DomainMapping::from_toml_str(
            r#"
            [customer]
            entities = ["Contact"]
            "#,
        )
        .unwrap();

        let plan = build_plan(&mapping, &index, &config).unwrap();
        assert_eq!(plan.pending_count(), 0);
        assert_eq!(plan.in_place_count(), 1);
        assert!(plan.rename_table().is_empty());
    }
}
