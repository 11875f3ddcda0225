pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::mapping::{DomainMapping, DomainSpec};
pub use config::CliConfig;
pub use core::engine::{ReorgEngine, RunOutcome};
pub use domain::model::{MovePlan, RunSummary};
pub use utils::error::{ReorgError, Result};
