use crate::domain::model::{ClassLocation, Unresolved};
use crate::utils::error::Result;
use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of resolving one mapped class against the index.
#[derive(Debug)]
pub enum Resolution {
    Found(ClassLocation),
    Unresolved(Unresolved),
}

/// One-shot index of the source tree: file stem -> every matching file.
/// Built once per run so the ambiguity checks see a consistent snapshot
/// instead of repeated ad hoc directory scans.
pub struct ClassIndex {
    files: HashMap<String, Vec<PathBuf>>,
    package_re: Regex,
}

impl ClassIndex {
    pub fn build(root: &Path, extension: &str) -> Result<Self> {
        let mut files: HashMap<String, Vec<PathBuf>> = HashMap::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(extension) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                files
                    .entry(stem.to_string())
                    .or_default()
                    .push(path.to_path_buf());
            }
        }

        tracing::debug!(
            "Indexed {} class files under {}",
            files.values().map(Vec::len).sum::<usize>(),
            root.display()
        );

        Ok(Self {
            files,
            package_re: Regex::new(r"(?m)^\s*package\s+([A-Za-z_][\w.]*)\s*;")?,
        })
    }

    pub fn file_count(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    /// Resolve a class name to its single source file and current package.
    /// Zero or multiple matches are collected as `Unresolved`, not errors;
    /// only genuine read failures propagate.
    pub fn resolve(&self, class_name: &str) -> Result<Resolution> {
        let candidates = match self.files.get(class_name) {
            None => {
                return Ok(Resolution::Unresolved(Unresolved::NotFound {
                    class_name: class_name.to_string(),
                }))
            }
            Some(paths) => paths,
        };

        if candidates.len() > 1 {
            return Ok(Resolution::Unresolved(Unresolved::Ambiguous {
                class_name: class_name.to_string(),
                candidates: candidates.clone(),
            }));
        }

        let path = &candidates[0];
        let content = std::fs::read_to_string(path)?;
        match self.package_re.captures(&content) {
            Some(caps) => Ok(Resolution::Found(ClassLocation {
                path: path.clone(),
                package: caps[1].to_string(),
            })),
            None => Ok(Resolution::Unresolved(Unresolved::MissingPackageDeclaration {
                class_name: class_name.to_string(),
                path: path.clone(),
            })),
        }
    }
}
