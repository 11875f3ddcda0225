use std::path::Path;

/// Configuration consumed by the engine, kept behind a trait so tests can
/// drive runs without going through the CLI parser.
pub trait ConfigProvider {
    fn source_root(&self) -> &Path;
    fn base_package(&self) -> &str;
    fn source_extension(&self) -> &str;
    fn domain_filter(&self) -> Option<&str>;
    fn dry_run(&self) -> bool;
}
