pub mod mapping;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_existing_dir, validate_extension, validate_non_empty_string, validate_package_name,
    Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "repack")]
#[command(about = "Reorganize a layer-based Java source tree into domain-based packages")]
pub struct CliConfig {
    #[arg(long, default_value = "backend/src/main/java/com/skillbridge")]
    pub root: PathBuf,

    #[arg(long, default_value = "com.skillbridge")]
    pub base_package: String,

    #[arg(long, default_value = "java")]
    pub ext: String,

    #[arg(long, help = "Load the domain mapping from a TOML file instead of the embedded one")]
    pub mapping: Option<PathBuf>,

    #[arg(long, help = "Restrict the run to a single domain")]
    pub domain: Option<String>,

    #[arg(long, help = "Print the plan without touching the filesystem")]
    pub dry_run: bool,

    #[arg(long, help = "Emit the run summary as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_existing_dir("root", &self.root)?;
        validate_package_name("base_package", &self.base_package)?;
        validate_extension("ext", &self.ext)?;
        if let Some(domain) = &self.domain {
            validate_non_empty_string("domain", domain)?;
        }
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn source_root(&self) -> &Path {
        &self.root
    }

    fn base_package(&self) -> &str {
        &self.base_package
    }

    fn source_extension(&self) -> &str {
        &self.ext
    }

    fn domain_filter(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}
