use crate::config::mapping::DomainMapping;
use crate::core::locator::ClassIndex;
use crate::core::{mover, planner, rewriter};
use crate::domain::model::RunSummary;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ReorgError, Result};
use crate::utils::report;
use crate::utils::validation::Validate;

/// Result of a run that got past planning: the summary plus the failure that
/// interrupted the move phase, if any. The summary is always populated so the
/// reporter can print partial progress even when the run stopped mid-move.
/// Errors raised before any mutation (bad mapping, plan conflicts) are still
/// plain `Err`s.
#[derive(Debug)]
pub struct RunOutcome {
    pub summary: RunSummary,
    pub failure: Option<ReorgError>,
}

/// Orchestrates one run: validate -> index -> plan -> move -> rewrite.
/// Validation and planning happen before any mutation, so configuration and
/// conflict errors always leave the tree untouched.
pub struct ReorgEngine<C: ConfigProvider> {
    config: C,
    mapping: DomainMapping,
}

impl<C: ConfigProvider> ReorgEngine<C> {
    pub fn new(config: C, mapping: DomainMapping) -> Self {
        Self { config, mapping }
    }

    pub fn run(&self) -> Result<RunOutcome> {
        self.mapping.validate()?;

        tracing::info!("Indexing {}", self.config.source_root().display());
        let index = ClassIndex::build(self.config.source_root(), self.config.source_extension())?;
        tracing::info!("Indexed {} source files", index.file_count());

        let plan = planner::build_plan(&self.mapping, &index, &self.config)?;
        report::print_plan(&plan);

        let mut summary = RunSummary::from_plan(&plan, self.config.dry_run());
        if self.config.dry_run() {
            tracing::info!("Dry run requested, stopping before any mutation");
            return Ok(RunOutcome {
                summary,
                failure: None,
            });
        }

        match mover::execute(&plan) {
            Ok(moved) => summary.files_moved = moved,
            Err(e) => {
                if let ReorgError::MoveFailedError { completed, .. } = &e {
                    summary.files_moved = *completed;
                }
                // Imports were not rewritten; surface the partial summary
                // alongside the failure so the reporter still prints it.
                return Ok(RunOutcome {
                    summary,
                    failure: Some(e),
                });
            }
        }

        let stats = rewriter::rewrite_imports(
            self.config.source_root(),
            self.config.source_extension(),
            &plan.rename_table(),
        )?;
        summary.imports_rewritten = stats.imports_rewritten;
        summary.files_rewritten = stats.files_rewritten;

        Ok(RunOutcome {
            summary,
            failure: None,
        })
    }
}
