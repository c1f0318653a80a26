//! Writes one planned task to disk.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, trace};

use crate::{
    application::{
        ApplicationError,
        ports::{DocumentWriter, Filesystem},
    },
    domain::{Document, ScaffoldTask},
    error::ScaffResult,
};

/// Executes a single task: directory, serialization, file.
pub struct Materializer {
    filesystem: Box<dyn Filesystem>,
    writer: Box<dyn DocumentWriter>,
}

impl Materializer {
    pub fn new(filesystem: Box<dyn Filesystem>, writer: Box<dyn DocumentWriter>) -> Self {
        Self { filesystem, writer }
    }

    /// Materialize `document` for `task` under `root`, returning the written
    /// file path.
    ///
    /// Existing directories are fine; an existing file is truncated. The
    /// document is serialized before the file is opened, so a serializer
    /// failure leaves nothing behind.
    #[instrument(skip_all, fields(target = %task.target_path().display()))]
    pub fn materialize(
        &self,
        root: &Path,
        task: &ScaffoldTask,
        document: &Document,
    ) -> ScaffResult<PathBuf> {
        let dir = target_dir(root, task);
        self.filesystem.create_dir_all(&dir)?;

        let path = dir.join(task.file_name);
        let rendered =
            self.writer
                .serialize(document)
                .map_err(|e| ApplicationError::SerializationWrite {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
        trace!(content = %rendered, "Document rendered");

        self.filesystem.write_file(&path, rendered.as_bytes())?;
        debug!(bytes = rendered.len(), path = %path.display(), "File written");

        Ok(path)
    }
}

fn target_dir(root: &Path, task: &ScaffoldTask) -> PathBuf {
    if task.target_dir.as_os_str().is_empty() {
        root.to_path_buf()
    } else {
        root.join(&task.target_dir)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::{AppInputs, DocumentBuilder, DocumentShape, LocalsLevel};
    use crate::error::ScaffError;

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

    fn app_task() -> ScaffoldTask {
        ScaffoldTask::new(
            "envs/prod/api",
            DocumentShape::AppInclude(AppInputs::default()),
        )
    }

    #[test]
    fn creates_directory_then_writes_serialized_bytes() {
        let mut fs = MockFs::new();
        fs.expect_create_dir_all()
            .withf(|path| path == Path::new("work/infra/envs/prod/api"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("work/infra/envs/prod/api/app.hcl") && content == b"rendered"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut writer = MockWriter::new();
        writer
            .expect_serialize()
            .times(1)
            .returning(|_| Ok("rendered".to_string()));

        let materializer = Materializer::new(Box::new(fs), Box::new(writer));
        let task = app_task();
        let doc = DocumentBuilder::build(&task.shape);

        let written = materializer
            .materialize(Path::new("work/infra"), &task, &doc)
            .unwrap();
        assert_eq!(written, PathBuf::from("work/infra/envs/prod/api/app.hcl"));
    }

    #[test]
    fn root_task_writes_directly_under_root() {
        let mut fs = MockFs::new();
        fs.expect_create_dir_all()
            .withf(|path| path == Path::new("infra"))
            .returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        let mut writer = MockWriter::new();
        writer.expect_serialize().returning(|_| Ok(String::new()));

        let materializer = Materializer::new(Box::new(fs), Box::new(writer));
        let task = ScaffoldTask::new(
            PathBuf::new(),
            DocumentShape::RootBackend(Default::default()),
        );

        let written = materializer
            .materialize(Path::new("infra"), &task, &Document::new())
            .unwrap();
        assert_eq!(written, PathBuf::from("infra/terragrunt.hcl"));
    }

    #[test]
    fn directory_failure_stops_before_serializing() {
        let mut fs = MockFs::new();
        fs.expect_create_dir_all().returning(|path| {
            Err(ApplicationError::DirectoryCreation {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into())
        });
        fs.expect_write_file().times(0);
        let mut writer = MockWriter::new();
        writer.expect_serialize().times(0);

        let materializer = Materializer::new(Box::new(fs), Box::new(writer));
        let task = ScaffoldTask::new(
            "envs/prod",
            DocumentShape::EnvironmentLocals(LocalsLevel::Environment),
        );

        let err = materializer
            .materialize(Path::new("infra"), &task, &Document::new())
            .unwrap_err();
        assert!(matches!(
            err,
            ScaffError::Application(ApplicationError::DirectoryCreation { .. })
        ));
    }

    #[test]
    fn serializer_failure_is_reported_against_the_file() {
        let mut fs = MockFs::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(0);
        let mut writer = MockWriter::new();
        writer.expect_serialize().returning(|_| {
            Err(ApplicationError::RenderingFailed {
                reason: "bad identifier".into(),
            }
            .into())
        });

        let materializer = Materializer::new(Box::new(fs), Box::new(writer));
        let err = materializer
            .materialize(Path::new("infra"), &app_task(), &Document::new())
            .unwrap_err();

        match err {
            ScaffError::Application(ApplicationError::SerializationWrite { path, reason }) => {
                assert_eq!(path, PathBuf::from("infra/envs/prod/api/app.hcl"));
                assert!(reason.contains("bad identifier"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
