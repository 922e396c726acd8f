//! Capability-based UTF-8 filesystem helpers built on `cap-std` and `camino`.
//!
//! Every helper resolves an ambient directory for the target's parent and
//! performs the operation relative to it.
#![forbid(unsafe_code)]

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open a UTF-8 file path for reading using ambient authority.
///
/// # Errors
/// Propagates the underlying I/O error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read a whole UTF-8 file into a string.
///
/// # Errors
/// Returns an error when the parent directory or the file cannot be opened,
/// or when the contents are not valid UTF-8.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let (dir, name) = open_parent_dir(path)?;
    dir.read_to_string(name.as_str())
}

/// Write `contents` to `path`, creating missing parent directories.
///
/// # Errors
/// Returns an error when a parent directory cannot be created or the file
/// cannot be written.
pub fn write_utf8_file(path: &Utf8Path, contents: &str) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_parent_dir(path)?;
    dir.write(name.as_str(), contents)
}

/// Report whether `path` exists and is a regular file.
///
/// # Errors
/// Returns an error when the parent directory cannot be opened or the entry
/// cannot be inspected, including `NotFound` for a missing entry.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_parent_dir(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Create every missing directory above `path`.
///
/// # Errors
/// Returns an error when the path's anchor cannot be opened or a directory
/// cannot be created.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }
    if fs_utf8::Dir::open_ambient_dir(parent, ambient_authority()).is_ok() {
        return Ok(());
    }
    let (base, relative) = split_anchor(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(&relative)
}

fn open_parent_dir(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} has no file name")))?
        .to_owned();
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split a directory path into an openable anchor and the remainder
/// relative to it.
///
/// The anchor is the leading run of prefix, root, `.` and `..` components,
/// or `.` when there is none. Leading `..` components therefore resolve
/// against ambient authority rather than inside the capability.
fn split_anchor(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let mut components = dir.components().peekable();
    let mut anchor = Utf8PathBuf::new();
    while let Some(component) = components.next_if(|component| {
        matches!(
            component,
            Utf8Component::Prefix(_)
                | Utf8Component::RootDir
                | Utf8Component::CurDir
                | Utf8Component::ParentDir
        )
    }) {
        anchor.push(component);
    }
    if anchor.as_str().is_empty() {
        anchor.push(".");
    }
    let relative: Utf8PathBuf = components.collect();
    let base = fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?;
    Ok((base, relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    struct Workspace {
        _tmp: TempDir,
        root: Utf8PathBuf,
    }

    #[fixture]
    fn workspace() -> Workspace {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 tempdir");
        Workspace { _tmp: tmp, root }
    }

    #[rstest]
    fn write_creates_parent_directories(workspace: Workspace) {
        let target = workspace.root.join("nested/deeper/theme");
        write_utf8_file(&target, "dark\n").expect("write file");
        assert_eq!(read_utf8_file(&target).expect("read back"), "dark\n");
        assert!(file_is_file(&target).expect("inspect file"));
    }

    /// Restores the working directory when dropped.
    struct CwdGuard(std::path::PathBuf);

    impl Drop for CwdGuard {
        fn drop(&mut self) {
            drop(std::env::set_current_dir(&self.0));
        }
    }

    #[rstest]
    fn write_follows_parent_components(workspace: Workspace) {
        let work = workspace.root.join("work");
        std::fs::create_dir(&work).expect("create work dir");

        let existing = work.join("../theme");
        write_utf8_file(&existing, "dark\n").expect("write through existing parent");
        let created = work.join("../made/theme");
        write_utf8_file(&created, "light\n").expect("write through new parent");

        assert_eq!(
            read_utf8_file(&workspace.root.join("theme")).expect("read theme"),
            "dark\n"
        );
        assert_eq!(
            read_utf8_file(&workspace.root.join("made/theme")).expect("read made theme"),
            "light\n"
        );
    }

    #[rstest]
    fn write_accepts_relative_paths_above_cwd(workspace: Workspace) {
        let work = workspace.root.join("work");
        std::fs::create_dir(&work).expect("create work dir");
        let _guard = CwdGuard(std::env::current_dir().expect("current dir"));
        std::env::set_current_dir(&work).expect("enter work dir");

        write_utf8_file(Utf8Path::new("../theme"), "dark\n").expect("write sibling file");
        write_utf8_file(Utf8Path::new("../sub/theme"), "light\n").expect("create sibling dir");

        assert_eq!(
            std::fs::read_to_string(workspace.root.join("theme")).expect("read theme"),
            "dark\n"
        );
        assert_eq!(
            std::fs::read_to_string(workspace.root.join("sub/theme")).expect("read sub theme"),
            "light\n"
        );
    }

    #[rstest]
    fn directories_are_not_files(workspace: Workspace) {
        let dir = workspace.root.join("folder");
        std::fs::create_dir(&dir).expect("create folder");
        assert!(!file_is_file(&dir).expect("inspect folder"));
    }

    #[rstest]
    fn missing_files_report_not_found(workspace: Workspace) {
        let missing = workspace.root.join("absent.json");
        let inspect_err = file_is_file(&missing).expect_err("missing file");
        assert_eq!(inspect_err.kind(), io::ErrorKind::NotFound);
        let read_err = read_utf8_file(&missing).expect_err("missing file");
        assert_eq!(read_err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn open_reads_existing_file(workspace: Workspace) {
        use std::io::Read;

        let target = workspace.root.join("points.json");
        std::fs::write(&target, "[]").expect("seed file");
        let mut contents = String::new();
        open_utf8_file(&target)
            .expect("open file")
            .read_to_string(&mut contents)
            .expect("read file");
        assert_eq!(contents, "[]");
    }
}
