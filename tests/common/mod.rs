/*!
 * Common test utilities for the vttkit test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;

/// Route library logs through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Helper to get the absolute path to a test resource
pub fn test_resource_path(relative_path: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("resources");
    path.push(relative_path);
    path
}

/// Copies a test resource into `dir` and returns the copy's path
pub fn copy_resource(dir: &Path, relative_path: &str) -> Result<PathBuf> {
    let target = dir.join(relative_path);
    fs::copy(test_resource_path(relative_path), &target)?;
    Ok(target)
}

/// Reads a resource as text
pub fn read_resource(relative_path: &str) -> Result<String> {
    Ok(fs::read_to_string(test_resource_path(relative_path))?)
}

/// Splits file content into lines keeping their terminators
pub fn lines_with_terminators(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}
