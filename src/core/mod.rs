pub mod engine;
pub mod locator;
pub mod mover;
pub mod planner;
pub mod rewriter;

pub use crate::domain::model::{ClassLocation, MoveOp, MovePlan, RunSummary, Unresolved};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
