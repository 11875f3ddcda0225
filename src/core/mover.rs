use crate::domain::model::{MoveOp, MovePlan};
use crate::utils::error::{ReorgError, Result};
use regex::{Captures, Regex};
use std::fs;

/// Execute a validated plan: relocate each pending file and rewrite its
/// package declaration. Fail-fast; the error reports how far the run got so
/// the operator can resume or revert manually.
pub fn execute(plan: &MovePlan) -> Result<usize> {
    let package_re = Regex::new(r"(?m)^(\s*package\s+)[A-Za-z_][\w.]*(\s*;)")?;
    let total = plan.pending_count();
    let mut completed = 0;

    for op in plan.pending_moves() {
        move_one(op, &package_re).map_err(|e| ReorgError::MoveFailedError {
            class_name: op.class_name.clone(),
            source_path: op.source.clone(),
            destination: op.destination.clone(),
            completed,
            total,
            reason: e.to_string(),
        })?;

        completed += 1;
        tracing::info!(
            "Moved {} -> {}",
            op.source.display(),
            op.destination.display()
        );
    }

    Ok(completed)
}

fn move_one(op: &MoveOp, package_re: &Regex) -> std::io::Result<()> {
    if let Some(parent) = op.destination.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::rename(&op.source, &op.destination)?;

    let content = fs::read_to_string(&op.destination)?;
    let (rewritten, changed) = rewrite_package_declaration(&content, &op.new_package, package_re);
    if changed {
        fs::write(&op.destination, rewritten)?;
    }
    Ok(())
}

/// Replace the first package declaration with the destination package.
/// Returns the new content and whether anything changed.
fn rewrite_package_declaration(
    content: &str,
    new_package: &str,
    package_re: &Regex,
) -> (String, bool) {
    let rewritten = package_re.replace(content, |caps: &Captures| {
        format!("{}{}{}", &caps[1], new_package, &caps[2])
    });

    match rewritten {
        std::borrow::Cow::Borrowed(_) => (content.to_string(), false),
        std::borrow::Cow::Owned(new_content) => {
            let changed = new_content != content;
            (new_content, changed)
        }
    }
}
