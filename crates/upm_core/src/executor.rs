//! Realizes build plans on a filesystem.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};
use crate::fs::Filesystem;
use crate::plan::{BuildPlan, PlanStep};

/// Summary of an executed plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionReport {
    pub package_id: String,
    pub root: PathBuf,
    pub directories_created: usize,
    pub files_written: usize,
}

/// Writes a plan's directories and files in order.
///
/// There is no rollback: when a step fails, everything written before it
/// stays on disk and the error is returned as is.
pub struct PlanExecutor<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> PlanExecutor<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    pub fn execute(&self, plan: &BuildPlan) -> CoreResult<ExecutionReport> {
        let root = plan.root();
        // The root may have appeared since the plan was assembled.
        if self.fs.exists(&root) {
            return Err(CoreError::PackageAlreadyExists(root));
        }

        let mut report = ExecutionReport {
            package_id: plan.package_id().to_string(),
            root,
            directories_created: 0,
            files_written: 0,
        };

        for step in plan.steps() {
            match step {
                PlanStep::CreateDir(dir) => {
                    let path = plan.absolute(dir);
                    debug!("Creating directory {:?}", path);
                    self.fs.create_dir(&path)?;
                    report.directories_created += 1;
                }
                PlanStep::WriteFile(file) => {
                    let path = plan.absolute(&file.path);
                    debug!("Writing {:?} ({} bytes)", path, file.contents.len());
                    self.fs.write_file(&path, &file.contents)?;
                    report.files_written += 1;
                }
            }
        }

        info!(
            "Created package {} at {:?}",
            report.package_id, report.root
        );
        Ok(report)
    }
}
