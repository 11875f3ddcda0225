use crate::utils::error::Result;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, Default)]
pub struct RewriteStats {
    pub imports_rewritten: usize,
    pub files_rewritten: usize,
}

/// Codebase-wide import rewrite. Walks every source file under the root,
/// including files that did not move, and replaces each import whose FQN is
/// in the rename table. Cross-domain references (a customer class importing
/// the auth User, say) are covered because the table spans all domains.
///
/// Line-level textual substitution only: an FQN inside a block comment that
/// happens to look like an import line is a tolerated limitation.
pub fn rewrite_imports(
    root: &Path,
    extension: &str,
    renames: &HashMap<String, String>,
) -> Result<RewriteStats> {
    let mut stats = RewriteStats::default();
    if renames.is_empty() {
        return Ok(stats);
    }

    let import_re = Regex::new(r"(?m)^(\s*import\s+)([A-Za-z_][\w.]*)(\s*;)")?;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }

        let content = fs::read_to_string(path)?;
        let (rewritten, count) = rewrite_content(&content, renames, &import_re);
        if count > 0 {
            fs::write(path, rewritten)?;
            stats.imports_rewritten += count;
            stats.files_rewritten += 1;
            tracing::debug!("Rewrote {} imports in {}", count, path.display());
        }
    }

    Ok(stats)
}

/// Rewrite every matching import line in one file's content. Returns the new
/// content and the number of imports replaced.
fn rewrite_content(
    content: &str,
    renames: &HashMap<String, String>,
    import_re: &Regex,
) -> (String, usize) {
    let mut count = 0;
    let rewritten = import_re.replace_all(content, |caps: &Captures| {
        match renames.get(&caps[2]) {
            Some(new_fqn) => {
                count += 1;
                format!("{}{}{}", &caps[1], new_fqn, &caps[3])
            }
            None => caps[0].to_string(),
        }
    });
    (rewritten.into_owned(), count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn import_re() -> Regex {
        Regex::new(r"(?m)^(\s*import\s+)([A-Za-z_][\w.]*)(\s*;)").unwrap()
    }

    fn table() -> HashMap<String, String> {
        let mut renames = HashMap::new();
        renames.insert(
            "com.skillbridge.entities.User".to_string(),
            "com.skillbridge.auth.entities.User".to_string(),
        );
        renames.insert(
            "com.skillbridge.entities.Contact".to_string(),
            "com.skillbridge.customer.entities.Contact".to_string(),
        );
        renames
    }

    #[test]
    fn test_rewrites_only_renamed_imports() {
        let content = "package com.skillbridge.services;\n\n\
                       import com.skillbridge.entities.User;\n\
                       import com.skillbridge.entities.Contact;\n\
                       import java.util.List;\n\n\
                       public class ContactService {}\n";

        let (rewritten, count) = rewrite_content(content, &table(), &import_re());
        assert_eq!(count, 2);
        assert!(rewritten.contains("import com.skillbridge.auth.entities.User;"));
        assert!(rewritten.contains("import com.skillbridge.customer.entities.Contact;"));
        assert!(rewritten.contains("import java.util.List;"));
        assert!(!rewritten.contains("import com.skillbridge.entities.User;"));
    }

    #[test]
    fn test_non_import_occurrences_untouched() {
        // FQNs in code or comments are not import statements
        let content = "package com.x;\n\
                       // see com.skillbridge.entities.User for details\n\
                       public class Doc { String s = \"com.skillbridge.entities.User\"; }\n";

        let (rewritten, count) = rewrite_content(content, &table(), &import_re());
        assert_eq!(count, 0);
        assert_eq!(rewritten, content);
    }

    #[test]
    fn test_unrelated_import_with_shared_prefix_untouched() {
        let content = "import com.skillbridge.entities.UserProfile;\n";
        let (rewritten, count) = rewrite_content(content, &table(), &import_re());
        assert_eq!(count, 0);
        assert_eq!(rewritten, content);
    }

    #[test]
    fn test_rewrite_imports_walks_all_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path();

        let untouched = root.join("a/Unrelated.java");
        let touched = root.join("b/deep/ContactService.java");
        std::fs::create_dir_all(untouched.parent().unwrap()).unwrap();
        std::fs::create_dir_all(touched.parent().unwrap()).unwrap();
        std::fs::write(&untouched, "package com.a;\nimport java.util.List;\n").unwrap();
        std::fs::write(
            &touched,
            "package com.b;\nimport com.skillbridge.entities.User;\n",
        )
        .unwrap();

        let stats = rewrite_imports(root, "java", &table()).unwrap();
        assert_eq!(stats.files_rewritten, 1);
        assert_eq!(stats.imports_rewritten, 1);

        let content = std::fs::read_to_string(&touched).unwrap();
        assert!(content.contains("import com.skillbridge.auth.entities.User;"));
        // File with no renamed imports is left byte-identical
        assert_eq!(
            std::fs::read_to_string(&untouched).unwrap(),
            "package com.a;\nimport java.util.List;\n"
        );
    }
}
