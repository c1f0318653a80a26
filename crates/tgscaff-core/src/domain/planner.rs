//! Task planning.
//!
//! Turns an [`EnvironmentSpec`] into the ordered list of files to write.
//! Pure: no I/O, same spec in, same plan out.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::domain::entities::{
    DocumentShape, EnvironmentSpec, LocalsLevel, ScaffoldPlan, ScaffoldTask,
};

pub struct ScaffoldPlanner;

impl ScaffoldPlanner {
    /// Plan every file for `spec`, in write order:
    ///
    /// 1. the root backend document at the base path,
    /// 2. two locals documents per parent path (the path, then its containing
    ///    directory),
    /// 3. one app document per `(app, parent)` pair, apps in the outer loop.
    ///
    /// Overlapping locals targets are kept; the later write wins on disk.
    #[instrument(skip_all, fields(base = %spec.base_path().display()))]
    pub fn plan(spec: &EnvironmentSpec) -> ScaffoldPlan {
        let mut plan = ScaffoldPlan::new(spec.base_path());

        plan.push(ScaffoldTask::new(
            PathBuf::new(),
            DocumentShape::RootBackend(spec.backend().clone()),
        ));

        for parent in spec.parent_paths() {
            plan.push(ScaffoldTask::new(
                parent.clone(),
                DocumentShape::EnvironmentLocals(LocalsLevel::Environment),
            ));
            plan.push(ScaffoldTask::new(
                containing_dir(parent),
                DocumentShape::EnvironmentLocals(LocalsLevel::Parent),
            ));
        }

        for app in spec.app_paths() {
            for parent in spec.parent_paths() {
                plan.push(ScaffoldTask::new(
                    parent.join(app),
                    DocumentShape::AppInclude(spec.app_inputs().clone()),
                ));
            }
        }

        debug!(
            tasks = plan.len(),
            distinct = plan.distinct_targets().len(),
            "Plan built"
        );
        plan
    }
}

/// Immediate containing directory; the plan root for single-segment paths.
fn containing_dir(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}
