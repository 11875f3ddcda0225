use crate::domain::model::{Layer, MappingEntry};
use crate::utils::error::{ReorgError, Result};
use crate::utils::validation::{validate_sub_path, Validate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Default mapping for the SkillBridge backend, compiled into the binary.
const EMBEDDED_MAPPING: &str = include_str!("skillbridge_mapping.toml");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DtoSpec {
    #[serde(default)]
    pub request: Vec<String>,
    #[serde(default)]
    pub response: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainSpec {
    #[serde(default)]
    pub entities: Vec<String>,
    #[serde(default)]
    pub repositories: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
    /// Class name -> destination sub-path relative to the source root.
    /// Controllers are split across public/ and client/ sub-trees, so each
    /// carries its target explicitly.
    #[serde(default)]
    pub controllers: BTreeMap<String, String>,
    #[serde(default)]
    pub dtos: DtoSpec,
}

impl DomainSpec {
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
            && self.repositories.is_empty()
            && self.services.is_empty()
            && self.controllers.is_empty()
            && self.dtos.request.is_empty()
            && self.dtos.response.is_empty()
    }
}

/// Domain name -> classes, in deterministic (sorted) order so a plan prints
/// identically run-to-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainMapping {
    pub domains: BTreeMap<String, DomainSpec>,
}

impl DomainMapping {
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_MAPPING)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mapping: DomainMapping = toml::from_str(content)?;
        Ok(mapping)
    }

    /// Flatten the mapping into one entry per class, optionally restricted to
    /// a single domain. Order: domain (sorted), then entities, repositories,
    /// services, controllers, request DTOs, response DTOs.
    pub fn entries(&self, domain_filter: Option<&str>) -> Result<Vec<MappingEntry>> {
        if let Some(name) = domain_filter {
            if !self.domains.contains_key(name) {
                return Err(ReorgError::ConfigError {
                    message: format!(
                        "unknown domain '{}' (known: {})",
                        name,
                        self.domains.keys().cloned().collect::<Vec<_>>().join(", ")
                    ),
                });
            }
        }

        let mut entries = Vec::new();
        for (domain, spec) in &self.domains {
            if domain_filter.is_some_and(|name| name != domain.as_str()) {
                continue;
            }

            let mut push = |class_name: &String, layer: Layer, override_path: Option<&String>| {
                entries.push(MappingEntry {
                    domain: domain.clone(),
                    class_name: class_name.clone(),
                    layer,
                    override_path: override_path.cloned(),
                });
            };

            for class in &spec.entities {
                push(class, Layer::Entities, None);
            }
            for class in &spec.repositories {
                push(class, Layer::Repositories, None);
            }
            for class in &spec.services {
                push(class, Layer::Services, None);
            }
            for (class, sub_path) in &spec.controllers {
                push(class, Layer::Controllers, Some(sub_path));
            }
            for class in &spec.dtos.request {
                push(class, Layer::RequestDtos, None);
            }
            for class in &spec.dtos.response {
                push(class, Layer::ResponseDtos, None);
            }
        }
        Ok(entries)
    }
}

impl Validate for DomainMapping {
    fn validate(&self) -> Result<()> {
        if self.domains.is_empty() {
            return Err(ReorgError::ConfigError {
                message: "mapping contains no domains".to_string(),
            });
        }

        // Each class name must appear in exactly one domain and layer,
        // otherwise the plan could claim one file twice.
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for (domain, spec) in &self.domains {
            if spec.is_empty() {
                return Err(ReorgError::ConfigError {
                    message: format!("domain '{}' has no classes", domain),
                });
            }

            let classes = spec
                .entities
                .iter()
                .chain(&spec.repositories)
                .chain(&spec.services)
                .chain(spec.controllers.keys())
                .chain(&spec.dtos.request)
                .chain(&spec.dtos.response);

            for class in classes {
                if let Some(previous) = seen.insert(class.as_str(), domain.as_str()) {
                    return Err(ReorgError::ConfigError {
                        message: format!(
                            "class '{}' is mapped more than once (domains '{}' and '{}')",
                            class, previous, domain
                        ),
                    });
                }
            }

            for (class, sub_path) in &spec.controllers {
                validate_sub_path(&format!("{}.controllers.{}", domain, class), sub_path)?;
            }
        }
        Ok(())
    }
}
