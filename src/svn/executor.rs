//! Plan execution against a working copy
//!
//! Consumes the planner's output exactly once, in order. The plan is fully
//! built before this module sees it; nothing here re-plans or reorders.

use std::path::Path;

use crate::error::Result;
use crate::planner::CheckoutOperation;
use crate::svn::{SvnClient, SvnDepth};

/// Execute an ordered checkout plan inside `root`.
///
/// An ensure step is skipped when the path already exists in the working
/// copy; fetch steps always run, svn itself being idempotent about them.
/// The first failing command aborts the run.
pub fn execute_plan(client: &SvnClient, root: &Path, operations: &[CheckoutOperation]) -> Result<()> {
    for operation in operations {
        match operation {
            CheckoutOperation::EnsureEmpty(path) => {
                if !root.join(path).exists() {
                    client.update_set_depth(root, path, SvnDepth::Empty)?;
                }
            }
            CheckoutOperation::FetchFiles(path) => {
                client.update_set_depth(root, path, SvnDepth::Files)?;
            }
            CheckoutOperation::FetchRecursive(path) => {
                client.update_set_depth(root, path, SvnDepth::Infinity)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_existing_paths_are_skipped() {
        // Every ensure target already exists, so no svn command runs and
        // execution succeeds even without a reachable repository.
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("a/b")).unwrap();

        let client = SvnClient::new("HEAD", vec![]);
        let operations = vec![
            CheckoutOperation::EnsureEmpty("a".to_string()),
            CheckoutOperation::EnsureEmpty("a/b".to_string()),
        ];

        assert!(execute_plan(&client, temp.path(), &operations).is_ok());
    }

    #[test]
    fn test_empty_plan_is_a_no_op() {
        let temp = TempDir::new().unwrap();
        let client = SvnClient::new("HEAD", vec![]);
        assert!(execute_plan(&client, temp.path(), &[]).is_ok());
    }

}
