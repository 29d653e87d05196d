use crate::error::{Result, SetupError};
use crate::ui::UserInterface;
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions treated as headers when none are added.
pub const DEFAULT_EXTENSIONS: &[&str] = &["h", "hpp"];

/// A header found under the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFile {
    /// Full path of the header.
    pub source: PathBuf,
    /// Path relative to the source root.
    pub relative: PathBuf,
}

impl HeaderFile {
    /// Where this header lands under `destination_root`.
    pub fn destination_in(&self, destination_root: &Path) -> PathBuf {
        destination_root.join(&self.relative)
    }
}

/// What a sync copied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Destination paths written, in walk order.
    pub copied: Vec<PathBuf>,
}

/// Mirrors headers from one tree into another.
#[derive(Debug, Clone)]
pub struct HeaderSync {
    source: PathBuf,
    destination: PathBuf,
    extensions: Vec<String>,
}

impl HeaderSync {
    /// Sync from `source` into `destination` with the default extensions.
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Also treat these extensions as headers. A leading dot is optional.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for ext in extensions {
            let ext = ext.as_ref().trim_start_matches('.');
            if !ext.is_empty() && !self.extensions.iter().any(|e| e == ext) {
                self.extensions.push(ext.to_string());
            }
        }
        self
    }

    /// Extensions currently matched, without dots.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether the file name ends in a header extension (case-sensitive).
    pub fn is_header(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|ext| {
            name.strip_suffix(ext.as_str())
                .is_some_and(|stem| stem.ends_with('.'))
        })
    }

    /// Find every header under the source root.
    ///
    /// Fails with [`SetupError::InvalidSourceDir`] before touching anything
    /// when the source is not a directory, and with
    /// [`SetupError::DestinationIsSource`] when both roots are the same
    /// directory.
    pub fn discover(&self) -> Result<Vec<HeaderFile>> {
        if !self.source.is_dir() {
            return Err(SetupError::InvalidSourceDir {
                path: self.source.clone(),
            });
        }

        let source_root = fs::canonicalize(&self.source)?;
        let destination = fs::canonicalize(&self.destination).ok();
        if destination.as_ref() == Some(&source_root) {
            return Err(SetupError::DestinationIsSource {
                path: self.destination.clone(),
            });
        }

        // Skip the destination when it lives inside the source tree.
        let walker = WalkDir::new(&self.source)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                !(entry.file_type().is_dir()
                    && entry.depth() > 0
                    && destination.is_some()
                    && fs::canonicalize(entry.path()).ok() == destination)
            });

        let mut headers = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() || !self.is_header(entry.path()) {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&self.source)
                .map_err(|e| anyhow::anyhow!(e))?
                .to_path_buf();
            headers.push(HeaderFile {
                source: entry.path().to_path_buf(),
                relative,
            });
        }

        tracing::debug!(
            "Found {} headers under {}",
            headers.len(),
            self.source.display()
        );
        Ok(headers)
    }

    /// Copy every header into the mirrored destination path.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<SyncReport> {
        let headers = self.discover()?;
        let mut report = SyncReport::default();

        for header in headers {
            let target = header.destination_in(&self.destination);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|source| SetupError::HeaderCopy {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            copy_with_metadata(&header.source, &target).map_err(|source| {
                SetupError::HeaderCopy {
                    path: header.source.clone(),
                    source,
                }
            })?;
            ui.message(&format!(
                "Copied: {} → {}",
                header.source.display(),
                target.display()
            ));
            report.copied.push(target);
        }

        Ok(report)
    }
}

/// Copy contents, then timestamps, then permissions.
///
/// Permissions go last so a read-only source still gets its times applied.
fn copy_with_metadata(source: &Path, target: &Path) -> io::Result<()> {
    let metadata = fs::metadata(source)?;

    // Truncating the target would wipe the source when both are one file.
    if target.exists() && fs::canonicalize(source)? == fs::canonicalize(target)? {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is the same file as its destination", source.display()),
        ));
    }

    if let Ok(existing) = fs::metadata(target) {
        if existing.permissions().readonly() {
            let mut writable = existing.permissions();
            #[allow(clippy::permissions_set_readonly_false)]
            writable.set_readonly(false);
            fs::set_permissions(target, writable)?;
        }
    }

    let mut input = File::open(source)?;
    let mut output = File::create(target)?;
    io::copy(&mut input, &mut output)?;

    let mut times = FileTimes::new();
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    output.set_times(times)?;
    drop(output);

    fs::set_permissions(target, metadata.permissions())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn write(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    /// All files under `root`, relative, sorted.
    fn tree(root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
            .collect();
        files.sort();
        files
    }

    #[test]
    fn is_header_matches_default_extensions() {
        let sync = HeaderSync::new("src", "dst");
        assert!(sync.is_header(Path::new("a/b/x.h")));
        assert!(sync.is_header(Path::new("Renderer.hpp")));
        assert!(!sync.is_header(Path::new("a/y.txt")));
        assert!(!sync.is_header(Path::new("x.cpp")));
        assert!(!sync.is_header(Path::new("x.hh")));
        assert!(!sync.is_header(Path::new("graph")));
    }

    #[test]
    fn is_header_is_case_sensitive() {
        let sync = HeaderSync::new("src", "dst");
        assert!(!sync.is_header(Path::new("LEGACY.H")));
    }

    #[test]
    fn is_header_needs_a_dot_before_extension() {
        let sync = HeaderSync::new("src", "dst");
        assert!(!sync.is_header(Path::new("graph")));
        assert!(!sync.is_header(Path::new("path")));
    }

    #[test]
    fn with_extensions_normalizes_dots_and_dedupes() {
        let sync = HeaderSync::new("src", "dst").with_extensions([".inl", "hpp", "hxx", ""]);
        assert_eq!(sync.extensions(), ["h", "hpp", "inl", "hxx"]);
        assert!(sync.is_header(Path::new("Math.inl")));
    }

    #[test]
    fn copies_headers_and_skips_other_files() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        write(&src.join("a/b/x.h"), "#pragma once\n");
        write(&src.join("a/y.txt"), "notes\n");

        let mut ui = MockUI::new();
        let report = HeaderSync::new(&src, &dst).run(&mut ui).unwrap();

        assert_eq!(tree(&dst), vec![PathBuf::from("a/b/x.h")]);
        assert_eq!(report.copied, vec![dst.join("a/b/x.h")]);
        assert_eq!(
            fs::read_to_string(dst.join("a/b/x.h")).unwrap(),
            "#pragma once\n"
        );
        assert!(ui.messages()[0].starts_with("Copied: "));
    }

    #[test]
    fn missing_source_reports_error_and_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("does-not-exist");
        let dst = temp.path().join("dst");

        let mut ui = MockUI::new();
        let err = HeaderSync::new(&src, &dst).run(&mut ui).unwrap_err();

        assert!(matches!(err, SetupError::InvalidSourceDir { .. }));
        assert!(!dst.exists());
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn file_as_source_is_invalid() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("single.h");
        write(&src, "");
        let err = HeaderSync::new(&src, temp.path().join("dst"))
            .discover()
            .unwrap_err();
        assert!(matches!(err, SetupError::InvalidSourceDir { .. }));
    }

    #[test]
    fn second_run_yields_identical_tree() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        write(&src.join("Core/Log.h"), "log v1\n");
        write(&src.join("Renderer/Shader.hpp"), "shader\n");

        let sync = HeaderSync::new(&src, &dst);
        let mut ui = MockUI::new();
        sync.run(&mut ui).unwrap();
        let first = tree(&dst);

        write(&src.join("Core/Log.h"), "log v2\n");
        sync.run(&mut ui).unwrap();

        assert_eq!(tree(&dst), first);
        assert_eq!(fs::read_to_string(dst.join("Core/Log.h")).unwrap(), "log v2\n");
    }

    #[test]
    fn stale_destination_files_are_kept() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        write(&src.join("x.h"), "");
        write(&dst.join("old.h"), "stale");

        HeaderSync::new(&src, &dst).run(&mut MockUI::new()).unwrap();

        assert_eq!(tree(&dst), vec![PathBuf::from("old.h"), PathBuf::from("x.h")]);
    }

    #[test]
    fn preserves_modification_time() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        write(&src.join("x.h"), "");
        let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        File::options()
            .write(true)
            .open(src.join("x.h"))
            .unwrap()
            .set_modified(stamp)
            .unwrap();

        HeaderSync::new(&src, &dst).run(&mut MockUI::new()).unwrap();

        let copied = fs::metadata(dst.join("x.h")).unwrap().modified().unwrap();
        assert_eq!(copied, stamp);
    }

    #[test]
    fn read_only_header_can_be_synced_twice() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        let header = src.join("Frozen.h");
        write(&header, "frozen\n");
        let mut perms = fs::metadata(&header).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&header, perms).unwrap();

        let sync = HeaderSync::new(&src, &dst);
        sync.run(&mut MockUI::new()).unwrap();
        sync.run(&mut MockUI::new()).unwrap();

        assert!(fs::metadata(dst.join("Frozen.h"))
            .unwrap()
            .permissions()
            .readonly());
    }

    #[test]
    fn destination_inside_source_is_not_rescanned() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = src.join("include");
        write(&src.join("x.h"), "");

        let sync = HeaderSync::new(&src, &dst);
        sync.run(&mut MockUI::new()).unwrap();
        let report = sync.run(&mut MockUI::new()).unwrap();

        assert_eq!(report.copied, vec![dst.join("x.h")]);
        assert!(!dst.join("include").exists());
    }

    #[test]
    fn same_source_and_destination_is_rejected_untouched() {
        let temp = TempDir::new().unwrap();
        let inc = temp.path().join("inc");
        write(&inc.join("Bee.h"), "#pragma once\nint bee();\n");

        let mut ui = MockUI::new();
        let err = HeaderSync::new(&inc, &inc).run(&mut ui).unwrap_err();

        assert!(matches!(err, SetupError::DestinationIsSource { .. }));
        assert_eq!(
            fs::read_to_string(inc.join("Bee.h")).unwrap(),
            "#pragma once\nint bee();\n"
        );
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn destination_spelled_differently_still_matches_source() {
        let temp = TempDir::new().unwrap();
        let inc = temp.path().join("inc");
        write(&inc.join("Bee.h"), "keep\n");

        let err = HeaderSync::new(&inc, inc.join("."))
            .run(&mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, SetupError::DestinationIsSource { .. }));
        assert_eq!(fs::read_to_string(inc.join("Bee.h")).unwrap(), "keep\n");
    }

    #[cfg(unix)]
    #[test]
    fn header_linked_back_to_source_is_not_truncated() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        write(&src.join("Bee.h"), "int bee();\n");
        fs::create_dir_all(&dst).unwrap();
        std::os::unix::fs::symlink(src.join("Bee.h"), dst.join("Bee.h")).unwrap();

        let err = HeaderSync::new(&src, &dst)
            .run(&mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, SetupError::HeaderCopy { .. }));
        assert_eq!(fs::read_to_string(src.join("Bee.h")).unwrap(), "int bee();\n");
    }

    #[test]
    fn walk_order_is_sorted() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        write(&src.join("b.h"), "");
        write(&src.join("a.h"), "");
        write(&src.join("c/a.h"), "");

        let headers = HeaderSync::new(&src, temp.path().join("dst"))
            .discover()
            .unwrap();
        let relative: Vec<PathBuf> = headers.into_iter().map(|h| h.relative).collect();

        assert_eq!(
            relative,
            vec![
                PathBuf::from("a.h"),
                PathBuf::from("b.h"),
                PathBuf::from("c").join("a.h"),
            ]
        );
    }
}
