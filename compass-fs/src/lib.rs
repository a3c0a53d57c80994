//! Filesystem helpers for Compass artefacts, built on `cap-std` and
//! `camino`.
//!
//! Every helper resolves an ambient directory for the parent of the target
//! path and performs the operation relative to it.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io::{self, Read};
use std::path::Component;

const STAGING_SUFFIX: &str = ".partial";

/// Open a UTF-8 file path for reading.
///
/// # Errors
/// Propagates the underlying I/O error, including `NotFound`.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read a whole file, returning `None` when it does not exist.
///
/// # Errors
/// Returns any I/O error other than `NotFound`.
pub fn read_if_exists(path: &Utf8Path) -> io::Result<Option<Vec<u8>>> {
    let mut file = match open_utf8_file(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err),
    };
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(Some(bytes))
}

/// Replace the contents of `path` with `contents`.
///
/// The bytes are first written to a sibling staging file which is then
/// renamed over the target, so readers never observe a half-written file.
/// Missing parent directories are created. A failed rename removes the
/// staging file again.
///
/// # Errors
/// Propagates I/O errors from directory creation, writing, or the rename.
pub fn write_replacing(path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, file_name) = open_parent_dir(path)?;
    let staging = format!("{file_name}{STAGING_SUFFIX}");
    dir.write(staging.as_str(), contents)?;
    if let Err(err) = dir.rename(staging.as_str(), &dir, file_name.as_str()) {
        return match dir.remove_file(staging.as_str()) {
            Ok(()) => Err(err),
            Err(cleanup) => Err(io::Error::new(
                err.kind(),
                format!("{err} (staging file {staging} left behind: {cleanup})"),
            )),
        };
    }
    Ok(())
}

/// Report whether `path` exists and is a regular file.
///
/// # Errors
/// Returns `NotFound` when the path is absent, or any other I/O error
/// raised while inspecting it.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, file_name) = open_parent_dir(path)?;
    dir.metadata(file_name.as_str()).map(|meta| meta.is_file())
}

/// Ensure the parent directory of `path` exists.
///
/// # Errors
/// Propagates I/O errors raised while creating directories.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }
    let (root, relative) = split_root(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    root.create_dir_all(&relative)
}

fn open_parent_dir(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Split a directory path into an opened root directory and the remaining
/// relative path, so `cap-std` never sees an absolute path.
fn split_root(parent: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_parent = parent.as_std_path();
    let (root, relative) = match std_parent.components().next() {
        Some(Component::Prefix(prefix)) => {
            let prefix_str = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            let root = Utf8PathBuf::from(prefix_str).join(std::path::MAIN_SEPARATOR.to_string());
            let relative = std_parent
                .strip_prefix(root.as_std_path())
                .or_else(|_| std_parent.strip_prefix(prefix.as_os_str()))
                .map_err(|_| io::Error::other("failed to strip prefix from parent path"))?
                .to_path_buf();
            (root, relative)
        }
        Some(Component::RootDir) => {
            let root = Utf8PathBuf::from(std::path::MAIN_SEPARATOR.to_string());
            let relative = std_parent
                .strip_prefix(root.as_std_path())
                .map_err(|_| io::Error::other("failed to strip root from absolute path"))?
                .to_path_buf();
            (root, relative)
        }
        _ => (Utf8PathBuf::from("."), std_parent.to_path_buf()),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(&root, ambient_authority())?;
    let relative = Utf8PathBuf::from_path_buf(relative)
        .map_err(|_| io::Error::other("non-UTF-8 parent path"))?;
    Ok((dir, relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn workspace() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        (dir, root)
    }

    #[rstest]
    fn missing_file_reads_as_none(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let read = read_if_exists(&root.join("absent.json")).expect("read");
        assert!(read.is_none());
    }

    #[rstest]
    fn write_creates_parents_and_replaces(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let target = root.join("nested/deeper/profile.json");
        write_replacing(&target, b"first").expect("first write");
        write_replacing(&target, b"second").expect("second write");
        let read = read_if_exists(&target).expect("read").expect("file exists");
        assert_eq!(read, b"second");
        assert!(!file_is_file(&root.join("nested/deeper/profile.json.partial")).unwrap_or(false));
    }

    #[rstest]
    fn failed_replace_removes_the_staging_file(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let target = root.join("profile.json");
        std::fs::create_dir(target.as_std_path()).expect("create blocking dir");
        std::fs::write(target.join("keep").as_std_path(), b"x").expect("fill blocking dir");

        write_replacing(&target, b"contents").expect_err("cannot replace a directory");

        let staging = root.join("profile.json.partial");
        assert!(!staging.as_std_path().exists());
        assert!(!file_is_file(&target).expect("inspect target"));
    }

    #[rstest]
    fn directories_are_not_files(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let nested = root.join("dir");
        std::fs::create_dir(nested.as_std_path()).expect("create dir");
        assert!(!file_is_file(&nested).expect("inspect"));
    }

    #[rstest]
    fn file_is_file_reports_not_found(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let err = file_is_file(&root.join("nope")).expect_err("missing");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
