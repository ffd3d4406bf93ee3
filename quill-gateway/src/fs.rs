use std::path::Path;

use crate::entry::{DirectoryEntry, sort_entries};
use crate::errors::GatewayError;

/// Filesystem operations consumed by the editor.
///
/// Implementations must be cheap to share between async tasks; every call
/// is a single blocking request and carries no state between calls.
pub trait FileSystem: Send + Sync {
    /// List the direct children of `path`, already ordered for display.
    fn list_directory(
        &self,
        path: &Path,
    ) -> Result<Vec<DirectoryEntry>, GatewayError>;

    fn read_file(&self, path: &Path) -> Result<String, GatewayError>;

    fn write_file(&self, path: &Path, content: &str)
    -> Result<(), GatewayError>;

    fn file_size(&self, path: &Path) -> Result<u64, GatewayError>;
}

/// List a directory, degrading any failure to an empty listing.
pub fn list_directory_or_empty(
    fs: &dyn FileSystem,
    path: &Path,
) -> Vec<DirectoryEntry> {
    match fs.list_directory(path) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("gateway failed to list directory: {err}");
            Vec::new()
        },
    }
}

/// [`FileSystem`] backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn list_directory(
        &self,
        path: &Path,
    ) -> Result<Vec<DirectoryEntry>, GatewayError> {
        let reader = std::fs::read_dir(path).map_err(|err| {
            if path.is_file() {
                GatewayError::NotADirectory(path.to_path_buf())
            } else {
                GatewayError::io(path, err)
            }
        })?;

        let mut entries = Vec::new();
        for entry in reader {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("gateway failed to read entry: {err}");
                    continue;
                },
            };

            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(err) => {
                    log::warn!("gateway failed to read entry type: {err}");
                    continue;
                },
            };

            let name = entry.file_name().to_string_lossy().to_string();
            entries.push(DirectoryEntry::new(
                name,
                entry.path(),
                file_type.is_dir(),
                file_type.is_file(),
            ));
        }

        sort_entries(&mut entries);
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> Result<String, GatewayError> {
        if path.is_dir() {
            return Err(GatewayError::NotAFile(path.to_path_buf()));
        }
        std::fs::read_to_string(path).map_err(|err| GatewayError::io(path, err))
    }

    fn write_file(
        &self,
        path: &Path,
        content: &str,
    ) -> Result<(), GatewayError> {
        std::fs::write(path, content).map_err(|err| GatewayError::io(path, err))
    }

    fn file_size(&self, path: &Path) -> Result<u64, GatewayError> {
        std::fs::metadata(path)
            .map(|meta| meta.len())
            .map_err(|err| GatewayError::io(path, err))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{FileSystem, LocalFileSystem, list_directory_or_empty};
    use crate::GatewayError;

    #[test]
    fn given_directory_with_files_when_listed_then_entries_are_ordered() {
        let root = test_temp_dir("list_directory");
        fs::create_dir_all(root.join("b-dir"))
            .expect("folder should be created");
        fs::write(root.join("a.txt"), "ok").expect("file should be created");
        fs::write(root.join("C.md"), "ok").expect("file should be created");

        let entries = LocalFileSystem
            .list_directory(&root)
            .expect("directory should list");

        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["b-dir", "a.txt", "C.md"]);
        assert!(entries[0].is_directory());
        assert!(entries[1].is_file());
        assert_eq!(entries[1].path(), root.join("a.txt"));

        fs::remove_dir_all(root).expect("test directory should be removed");
    }

    #[test]
    fn given_missing_directory_when_listed_or_empty_then_nothing_is_returned()
    {
        let root = test_temp_dir("missing_directory");
        let missing = root.join("does-not-exist");

        let entries = list_directory_or_empty(&LocalFileSystem, &missing);

        assert!(entries.is_empty());
        fs::remove_dir_all(root).expect("test directory should be removed");
    }

    #[test]
    fn given_written_file_when_read_back_then_content_and_size_match() {
        let root = test_temp_dir("write_read");
        let path = root.join("main.py");

        LocalFileSystem
            .write_file(&path, "print('hi')\n")
            .expect("file should be written");
        let content =
            LocalFileSystem.read_file(&path).expect("file should be read");
        let size = LocalFileSystem.file_size(&path).expect("size should load");

        assert_eq!(content, "print('hi')\n");
        assert_eq!(size, 12);
        fs::remove_dir_all(root).expect("test directory should be removed");
    }

    #[test]
    fn given_directory_path_when_read_as_file_then_not_a_file_is_returned() {
        let root = test_temp_dir("read_directory");

        let result = LocalFileSystem.read_file(&root);

        assert!(matches!(result, Err(GatewayError::NotAFile(_))));
        fs::remove_dir_all(root).expect("test directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "quill-gateway-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir).expect("test directory should be created");
        dir
    }
}
