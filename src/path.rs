//! Filesystem path helpers: well-known directories, on-disk sizes and MIME types.

use std::{
    fs::{self, Metadata},
    path::{Path, PathBuf},
};

use log::warn;
use walkdir::WalkDir;

use crate::compat::{Zz, ZzCompatible, ZzType};

/// MIME type reported when the extension is unknown.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Filesystem path subjects.
pub trait FsPath: AsRef<Path> {}

impl FsPath for Path {}
impl FsPath for PathBuf {}

impl ZzCompatible for Path {}
impl ZzCompatible for PathBuf {}

impl ZzType<Path> {
    /// The current user's home directory.
    #[must_use]
    pub fn home_directory() -> Option<PathBuf> {
        dirs::home_dir()
    }

    /// The current user's documents directory.
    #[must_use]
    pub fn documents_directory() -> Option<PathBuf> {
        dirs::document_dir()
    }

    /// `~/Library` on macOS, the local application data directory elsewhere.
    #[must_use]
    pub fn library_directory() -> Option<PathBuf> {
        if cfg!(target_os = "macos") {
            dirs::home_dir().map(|home| home.join("Library"))
        } else {
            dirs::data_local_dir()
        }
    }

    /// The current user's cache directory.
    #[must_use]
    pub fn caches_directory() -> Option<PathBuf> {
        dirs::cache_dir()
    }

    /// The system temporary directory.
    #[must_use]
    pub fn temp_directory() -> PathBuf {
        std::env::temp_dir()
    }
}

impl<'a, P: FsPath + ?Sized> Zz<&'a P> {
    fn path(&self) -> &'a Path {
        <P as AsRef<Path>>::as_ref(self.base)
    }

    /// Bytes the file occupies on disk.
    ///
    /// Prefers the allocated size and falls back to the logical length when no
    /// blocks are reported. Returns `None` when the metadata cannot be read.
    #[must_use]
    pub fn file_bytes(&self) -> Option<u64> {
        fs::metadata(self.path()).ok().map(|metadata| allocated_size(&metadata))
    }

    /// Bytes occupied by every file below the directory.
    ///
    /// Returns `None` when the directory itself cannot be listed. Entries that
    /// fail while walking are logged and skipped; the rest are still counted.
    #[must_use]
    pub fn directory_bytes(&self) -> Option<u64> {
        let root = self.path();
        if let Err(err) = fs::read_dir(root) {
            warn!("Cannot list {}: {err}", root.display());
            return None;
        }

        let mut total = 0u64;
        for entry in WalkDir::new(root).min_depth(1) {
            match entry {
                Ok(entry) if entry.file_type().is_file() => match entry.metadata() {
                    Ok(metadata) => total = total.saturating_add(allocated_size(&metadata)),
                    Err(err) => warn!("Skipping {}: {err}", entry.path().display()),
                },
                Ok(_) => {}
                Err(err) => warn!("Skipping entry below {}: {err}", root.display()),
            }
        }

        Some(total)
    }

    /// MIME type guessed from the extension, [`DEFAULT_MIME_TYPE`] when unknown.
    ///
    /// ```
    /// # use std::path::Path;
    /// # use zz_extension::ZzCompatible;
    /// assert_eq!(Path::new("photo.png").zz().mime_type(), "image/png");
    /// ```
    #[must_use]
    pub fn mime_type(&self) -> String {
        mime_guess::from_path(self.path())
            .first()
            .map_or_else(|| DEFAULT_MIME_TYPE.to_string(), |mime| mime.essence_str().to_string())
    }
}

#[cfg(unix)]
fn allocated_size(metadata: &Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;

    match metadata.blocks() {
        0 => metadata.len(),
        blocks => blocks.saturating_mul(512),
    }
}

#[cfg(not(unix))]
fn allocated_size(metadata: &Metadata) -> u64 {
    metadata.len()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn create_file(path: &Path, content: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(path, content).expect("Failed to write file");
    }

    #[test]
    fn test_temp_directory_exists() {
        assert!(ZzType::<Path>::temp_directory().exists());
    }

    #[test]
    fn test_library_directory_matches_platform() {
        let expected = if cfg!(target_os = "macos") {
            dirs::home_dir().map(|home| home.join("Library"))
        } else {
            dirs::data_local_dir()
        };
        assert_eq!(ZzType::<Path>::library_directory(), expected);
    }

    #[test]
    fn test_file_bytes_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        assert!(temp_dir.path().join("missing").zz().file_bytes().is_none());
    }

    #[test]
    fn test_file_bytes_covers_content() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.bin");
        create_file(&file, &[7u8; 5000]);

        let bytes = file.zz().file_bytes().unwrap();
        assert!(bytes >= 5000);
    }

    #[test]
    fn test_file_bytes_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("empty");
        create_file(&file, b"");

        assert_eq!(file.zz().file_bytes(), Some(0));
    }

    #[test]
    fn test_directory_bytes_sums_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let files = [
            root.join("a.txt"),
            root.join("nested/b.txt"),
            root.join("nested/deeper/c.bin"),
        ];
        for (i, file) in files.iter().enumerate() {
            create_file(file, &vec![b'x'; 1000 * (i + 1)]);
        }

        let expected: u64 = files.iter().filter_map(|f| f.zz().file_bytes()).sum();
        assert_eq!(root.zz().directory_bytes(), Some(expected));
    }

    #[test]
    fn test_directory_bytes_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(temp_dir.path().zz().directory_bytes(), Some(0));
    }

    #[test]
    fn test_directory_bytes_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(temp_dir.path().join("nope").zz().directory_bytes().is_none());
    }

    #[test]
    fn test_directory_bytes_on_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        create_file(&file, b"hello");

        assert!(file.zz().directory_bytes().is_none());
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(Path::new("photo.png").zz().mime_type(), "image/png");
        assert_eq!(Path::new("notes.txt").zz().mime_type(), "text/plain");
        assert_eq!(Path::new("index.html").zz().mime_type(), "text/html");
        assert_eq!(PathBuf::from("dir/data.json").zz().mime_type(), "application/json");
    }

    #[test]
    fn test_mime_type_unknown_extension() {
        assert_eq!(Path::new("archive.zzunknown").zz().mime_type(), DEFAULT_MIME_TYPE);
        assert_eq!(Path::new("Makefile").zz().mime_type(), DEFAULT_MIME_TYPE);
    }
}
