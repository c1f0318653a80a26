//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Validate the environment description
//! 2. Plan every file
//! 3. Build and materialize each document in plan order
//!
//! Execution is sequential and fail-fast. Files written before a failure are
//! left in place. The generation root is an explicit argument; the process
//! working directory is never touched.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{DocumentWriter, Filesystem},
        services::Materializer,
    },
    domain::{
        DocumentBuilder, DomainValidator as validator, EnvironmentSpec, ScaffoldPlan,
        ScaffoldPlanner, ShapeKind,
    },
    error::{ScaffError, ScaffResult},
};

/// One file write, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub kind: ShapeKind,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub written: Vec<WrittenFile>,
}

impl ScaffoldReport {
    /// Number of write operations, overwrites included.
    pub fn write_count(&self) -> usize {
        self.written.len()
    }

    /// Unique file paths left on disk.
    pub fn distinct_files(&self) -> BTreeSet<&Path> {
        self.written.iter().map(|w| w.path.as_path()).collect()
    }

    pub fn count(&self, kind: ShapeKind) -> usize {
        self.written.iter().filter(|w| w.kind == kind).count()
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    materializer: Materializer,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use tgscaff_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem, // impl Filesystem
    ///     writer,     // impl DocumentWriter
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, writer: Box<dyn DocumentWriter>) -> Self {
        Self {
            materializer: Materializer::new(filesystem, writer),
        }
    }

    /// Validate `spec` and compute its plan without writing anything.
    pub fn plan(&self, spec: &EnvironmentSpec) -> ScaffResult<ScaffoldPlan> {
        validator::validate_environment(spec).map_err(ScaffError::Domain)?;
        let plan = ScaffoldPlanner::plan(spec);
        validator::validate_plan(&plan).map_err(ScaffError::Domain)?;
        Ok(plan)
    }

    /// Generate every file for `spec` under `working_dir`.
    ///
    /// `basePath` is resolved against `working_dir`. The first failing task
    /// aborts the run.
    #[instrument(
        skip_all,
        fields(
            base = %spec.base_path().display(),
            working_dir = %working_dir.as_ref().display()
        )
    )]
    pub fn scaffold(
        &self,
        spec: &EnvironmentSpec,
        working_dir: impl AsRef<Path>,
    ) -> ScaffResult<ScaffoldReport> {
        let plan = self.plan(spec)?;
        let root = working_dir.as_ref().join(plan.root());

        info!(
            parents = spec.parent_paths().len(),
            apps = spec.app_paths().len(),
            tasks = plan.len(),
            "Scaffolding environment"
        );

        let mut report = ScaffoldReport {
            root: root.clone(),
            written: Vec::with_capacity(plan.len()),
        };

        for task in &plan {
            let document = DocumentBuilder::build(&task.shape);
            let path = self.materializer.materialize(&root, task, &document)?;
            info!(kind = %task.kind(), path = %path.display(), "Generated");
            report.written.push(WrittenFile {
                path,
                kind: task.kind(),
            });
        }

        debug!(
            writes = report.write_count(),
            files = report.distinct_files().len(),
            "Scaffold completed"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use mockall::mock;

    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::{BackendConfig, Document};

    mock! {
        pub Fs {}
        impl Filesystem for Fs {
            fn create_dir_all(&self, path: &Path) -> ScaffResult<()>;
            fn write_file(&self, path: &Path, content: &[u8]) -> ScaffResult<()>;
        }
    }

    mock! {
        pub Writer {}
        impl DocumentWriter for Writer {
            fn serialize(&self, document: &Document) -> ScaffResult<String>;
        }
    }

    fn scenario() -> EnvironmentSpec {
        EnvironmentSpec::builder("infra")
            .parent_paths(["envs/prod", "envs/dev"])
            .app("api")
            .backend(BackendConfig {
                bucket_type: "s3".into(),
                bucket_name: "b".into(),
                bucket_key: "k".into(),
                region: "us-east-1".into(),
                encryption: true,
                lock_table_name: "locks".into(),
            })
            .build()
            .unwrap()
    }

    fn writer(times: usize) -> MockWriter {
        let mut writer = MockWriter::new();
        writer
            .expect_serialize()
            .times(times)
            .returning(|_| Ok("body".into()));
        writer
    }

    #[test]
    fn writes_every_task_in_plan_order() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&written);

        let mut fs = MockFs::new();
        fs.expect_create_dir_all().times(7).returning(|_| Ok(()));
        fs.expect_write_file().times(7).returning(move |path, _| {
            sink.lock().unwrap().push(path.to_path_buf());
            Ok(())
        });

        let service = ScaffoldService::new(Box::new(fs), Box::new(writer(7)));
        let report = service.scaffold(&scenario(), "/work").unwrap();

        assert_eq!(report.root, PathBuf::from("/work/infra"));
        assert_eq!(report.write_count(), 7);
        assert_eq!(report.distinct_files().len(), 6);
        assert_eq!(report.count(ShapeKind::EnvironmentLocals), 4);
        assert_eq!(report.count(ShapeKind::AppInclude), 2);

        let written = written.lock().unwrap();
        assert_eq!(written[0], PathBuf::from("/work/infra/terragrunt.hcl"));
        assert_eq!(written[2], PathBuf::from("/work/infra/envs/account.hcl"));
        assert_eq!(written[4], PathBuf::from("/work/infra/envs/account.hcl"));
        assert_eq!(written[6], PathBuf::from("/work/infra/envs/dev/api/app.hcl"));
    }

    #[test]
    fn first_failure_aborts_the_run() {
        let mut calls = 0;
        let mut fs = MockFs::new();
        fs.expect_create_dir_all().times(2).returning(|_| Ok(()));
        fs.expect_write_file().times(2).returning(move |path, _| {
            calls += 1;
            if calls == 2 {
                Err(ApplicationError::FileCreation {
                    path: path.to_path_buf(),
                    reason: "Read-only file system".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });

        let service = ScaffoldService::new(Box::new(fs), Box::new(writer(2)));
        let err = service.scaffold(&scenario(), "/work").unwrap_err();

        match err {
            ScaffError::Application(ApplicationError::FileCreation { path, .. }) => {
                assert_eq!(path, PathBuf::from("/work/infra/envs/prod/account.hcl"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn plan_does_not_touch_the_filesystem() {
        let mut fs = MockFs::new();
        fs.expect_create_dir_all().times(0);
        fs.expect_write_file().times(0);

        let service = ScaffoldService::new(Box::new(fs), Box::new(writer(0)));
        let plan = service.plan(&scenario()).unwrap();

        assert_eq!(plan.len(), 7);
        assert_eq!(plan.root(), Path::new("infra"));
    }
}
