//! Guarded writes of the header and test stub.
//!
//! In [`WriteMode::Sequential`] the header is checked and written before the test stub
//! is even looked at, so a collision on the test stub leaves a fresh header behind.
//! [`WriteMode::Atomic`] checks both targets up front and removes the header again if
//! the test stub cannot be written.
//!
//! Existing files are never overwritten: files are opened with `create_new`, which also
//! covers a file appearing between the existence check and the write.

use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Result, SnippetError};
use crate::identifier::Identifier;
use crate::project::SnippetLayout;
use crate::templates::{self, RenderedSnippet};

/// How the two files are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Header check, header write, test check, test write.
    #[default]
    Sequential,
    /// Both files or neither.
    Atomic,
}

/// Files created by a successful run.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldReport {
    pub created: Vec<PathBuf>,
}

/// Validate `raw_name`, render both templates and write them under `layout`.
pub fn run(layout: &SnippetLayout, raw_name: &str, mode: WriteMode) -> Result<ScaffoldReport> {
    let id = Identifier::parse(raw_name)?;
    let rendered = templates::render_snippet(&id)?;
    write_snippet(layout, &id, &rendered, mode)
}

/// Write already rendered documents for `id`.
pub fn write_snippet(
    layout: &SnippetLayout,
    id: &Identifier,
    rendered: &RenderedSnippet,
    mode: WriteMode,
) -> Result<ScaffoldReport> {
    let header_path = layout.header_path(id);
    let test_path = layout.test_path(id);
    debug!(header = %header_path.display(), test = %test_path.display(), ?mode, "scaffolding snippet");

    match mode {
        WriteMode::Sequential => {
            ensure_absent(&header_path)?;
            create_file(&header_path, &rendered.header)?;

            ensure_absent(&test_path).inspect_err(|_| {
                warn!(header = %header_path.display(), "test stub collides, header was already written");
            })?;
            create_file(&test_path, &rendered.test)?;
        }
        WriteMode::Atomic => {
            ensure_absent(&header_path)?;
            ensure_absent(&test_path)?;
            create_file(&header_path, &rendered.header)?;

            if let Err(e) = create_file(&test_path, &rendered.test) {
                rollback(&header_path);
                return Err(e);
            }
        }
    }

    Ok(ScaffoldReport {
        created: vec![header_path, test_path],
    })
}

fn ensure_absent(path: &Path) -> Result<()> {
    debug!(path = %path.display(), "checking for existing file");
    if path.exists() {
        return Err(SnippetError::FileExists(path.to_path_buf()));
    }
    Ok(())
}

fn create_file(path: &Path, contents: &str) -> Result<()> {
    create_file_with(path, |file| write_contents(file, contents))
}

/// Create `path` exclusively and fill it with `write`. A failed write removes the
/// partially written file so a retry does not collide with it.
fn create_file_with<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => SnippetError::FileExists(path.to_path_buf()),
            _ => SnippetError::Io(e),
        })?;

    if let Err(e) = write(&mut file) {
        drop(file);
        if let Err(remove_err) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %remove_err, "could not remove partially written file");
        }
        return Err(SnippetError::Io(e));
    }
    info!(path = %path.display(), "wrote file");
    Ok(())
}

fn write_contents(mut out: impl Write, contents: &str) -> io::Result<()> {
    out.write_all(contents.as_bytes())?;
    out.flush()
}

fn rollback(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => warn!(path = %path.display(), "removed header after failed test stub write"),
        Err(e) => warn!(path = %path.display(), error = %e, "could not remove header during rollback"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn snippet_root() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::create_dir(dir.path().join("test")).unwrap();
        dir
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_creates_both_files() {
        let dir = snippet_root();
        let layout = SnippetLayout::new(dir.path());

        let report = run(&layout, "widget", WriteMode::Sequential).unwrap();

        assert_eq!(entries(&dir.path().join("src")), ["widget.hpp"]);
        assert_eq!(entries(&dir.path().join("test")), ["test_widget.cpp"]);
        assert_eq!(
            report.created,
            [
                dir.path().join("src/widget.hpp"),
                dir.path().join("test/test_widget.cpp"),
            ]
        );

        let expected = templates::render_snippet(&Identifier::parse("widget").unwrap()).unwrap();
        let header = fs::read_to_string(dir.path().join("src/widget.hpp")).unwrap();
        let test = fs::read_to_string(dir.path().join("test/test_widget.cpp")).unwrap();
        assert_eq!(header, expected.header);
        assert_eq!(test, expected.test);
    }

    #[test]
    fn test_invalid_name_touches_nothing() {
        let dir = snippet_root();
        let layout = SnippetLayout::new(dir.path());

        let err = run(&layout, "../escape", WriteMode::Sequential).unwrap_err();

        assert!(matches!(err, SnippetError::InvalidName { .. }));
        assert!(entries(&dir.path().join("src")).is_empty());
        assert!(entries(&dir.path().join("test")).is_empty());
    }

    #[test]
    fn test_header_collision_writes_nothing() {
        let dir = snippet_root();
        let layout = SnippetLayout::new(dir.path());
        let header = dir.path().join("src/widget.hpp");
        fs::write(&header, "// mine").unwrap();

        let err = run(&layout, "widget", WriteMode::Sequential).unwrap_err();

        match err {
            SnippetError::FileExists(path) => assert_eq!(path, header),
            other => panic!("expected FileExists, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(&header).unwrap(), "// mine");
        assert!(!dir.path().join("test/test_widget.cpp").exists());
    }

    #[test]
    fn test_collision_message_names_path() {
        let dir = snippet_root();
        let layout = SnippetLayout::new(dir.path());
        fs::write(dir.path().join("src/widget.hpp"), "").unwrap();

        let err = run(&layout, "widget", WriteMode::Sequential).unwrap_err();

        let msg = err.to_string();
        assert!(msg.starts_with("file already exists: "));
        assert!(msg.ends_with("widget.hpp"));
    }

    #[test]
    fn test_sequential_test_collision_leaves_header() {
        let dir = snippet_root();
        let layout = SnippetLayout::new(dir.path());
        let test = dir.path().join("test/test_widget.cpp");
        fs::write(&test, "// existing test").unwrap();

        let err = run(&layout, "widget", WriteMode::Sequential).unwrap_err();

        match err {
            SnippetError::FileExists(path) => assert_eq!(path, test),
            other => panic!("expected FileExists, got {other:?}"),
        }
        assert!(dir.path().join("src/widget.hpp").exists());
        assert_eq!(fs::read_to_string(&test).unwrap(), "// existing test");
    }

    #[test]
    fn test_atomic_test_collision_writes_nothing() {
        let dir = snippet_root();
        let layout = SnippetLayout::new(dir.path());
        let test = dir.path().join("test/test_widget.cpp");
        fs::write(&test, "// existing test").unwrap();

        let err = run(&layout, "widget", WriteMode::Atomic).unwrap_err();

        assert!(matches!(err, SnippetError::FileExists(ref p) if *p == test));
        assert!(entries(&dir.path().join("src")).is_empty());
    }

    #[test]
    fn test_atomic_rolls_back_header_on_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        let layout = SnippetLayout::new(dir.path());

        let err = run(&layout, "widget", WriteMode::Atomic).unwrap_err();

        assert!(matches!(err, SnippetError::Io(_)));
        assert!(entries(&dir.path().join("src")).is_empty());
    }

    #[test]
    fn test_sequential_missing_test_dir_keeps_header() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        let layout = SnippetLayout::new(dir.path());

        let err = run(&layout, "widget", WriteMode::Sequential).unwrap_err();

        assert!(matches!(err, SnippetError::Io(_)));
        assert_eq!(entries(&dir.path().join("src")), ["widget.hpp"]);
    }

    #[test]
    fn test_missing_src_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let layout = SnippetLayout::new(dir.path());

        let err = run(&layout, "widget", WriteMode::Sequential).unwrap_err();

        match err {
            SnippetError::Io(e) => assert_eq!(e.kind(), ErrorKind::NotFound),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_second_run_collides() {
        let dir = snippet_root();
        let layout = SnippetLayout::new(dir.path());
        run(&layout, "widget", WriteMode::Sequential).unwrap();

        let err = run(&layout, " widget ", WriteMode::Atomic).unwrap_err();

        assert!(matches!(err, SnippetError::FileExists(_)));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_contents_reports_writer_failure() {
        let err = write_contents(FailingWriter, "#ifndef X_H\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }

    #[test]
    fn test_write_contents_writes_everything() {
        let mut buf = Vec::new();
        write_contents(&mut buf, "namespace hsc_snippets\n").unwrap();
        assert_eq!(buf, b"namespace hsc_snippets\n");
    }

    #[test]
    fn test_failed_write_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_widget.cpp");

        let err = create_file_with(&path, |file| {
            file.write_all(b"#include <catch2/")?;
            write_contents(FailingWriter, "rest")
        })
        .unwrap_err();

        assert!(matches!(err, SnippetError::Io(ref e) if e.kind() == ErrorKind::Other));
        assert!(!path.exists());
        // The name is free again, so a retry succeeds.
        create_file(&path, "ok").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "ok");
    }

    #[test]
    fn test_create_file_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.hpp");
        fs::write(&path, "keep").unwrap();

        let err = create_file(&path, "clobber").unwrap_err();

        assert!(matches!(err, SnippetError::FileExists(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep");
    }
}
