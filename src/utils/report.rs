use crate::domain::model::{MovePlan, RunSummary};
use crate::utils::error::Result;

/// Print the plan in a stable order. The same lines are emitted for a dry
/// run and a real run so the two can be diffed.
pub fn print_plan(plan: &MovePlan) {
    println!("Plan: {} moves, {} already in place", plan.pending_count(), plan.in_place_count());

    for op in plan.pending_moves() {
        println!(
            "  {} -> {}  [{} -> {}]",
            op.source.display(),
            op.destination.display(),
            op.old_package,
            op.new_package
        );
    }

    for unresolved in &plan.unresolved {
        println!("  unresolved: {}", unresolved.describe());
    }
}

pub fn print_summary(summary: &RunSummary) {
    if summary.dry_run {
        println!("Dry run: no files were modified.");
        println!("Would move {} files ({} already in place)", summary.planned_moves, summary.files_in_place);
    } else {
        println!("Moved {} files ({} already in place)", summary.files_moved, summary.files_in_place);
        println!(
            "Rewrote {} imports across {} files",
            summary.imports_rewritten, summary.files_rewritten
        );
    }

    if summary.unresolved.is_empty() {
        println!("All mapped classes resolved.");
    } else {
        println!("{} mapped classes could not be resolved:", summary.unresolved.len());
        for unresolved in &summary.unresolved {
            println!("  - {}", unresolved.describe());
        }
    }
}

pub fn print_summary_json(summary: &RunSummary) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
