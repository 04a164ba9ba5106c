use std::fs;
use std::path::{Path, PathBuf};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::DocId;
use crate::storage::document_store::DocumentStore;

const FILE_EXTENSION: &str = "lz4";

/// Durable store: one LZ4 block per document under `root`.
///
/// Layout: `{root}/{id:010}.lz4`, size-prefixed block format.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(FileStore { root })
    }

    fn path_for(&self, id: DocId) -> PathBuf {
        self.root.join(format!("{:010}.{}", id.value(), FILE_EXTENSION))
    }
}

impl DocumentStore for FileStore {
    fn dump(&self, id: DocId, content: &str) -> Result<()> {
        let compressed = lz4_flex::compress_prepend_size(content.as_bytes());
        let path = self.path_for(id);
        // Write-then-rename so a crash never leaves a torn file behind.
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, compressed)
            .and_then(|_| fs::rename(&tmp, &path))
            .map_err(|e| Error::new(ErrorKind::StoreWrite, format!("{}: {}", path.display(), e)))
    }

    fn load(&self, id: DocId) -> Result<String> {
        let path = self.path_for(id);
        let bytes = fs::read(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::not_found(format!("document {} not in store", id.value()))
            } else {
                Error::from(e)
            }
        })?;
        let raw = lz4_flex::decompress_size_prepended(&bytes)
            .map_err(|e| Error::new(ErrorKind::Parse, format!("{}: {}", path.display(), e)))?;
        String::from_utf8(raw)
            .map_err(|e| Error::new(ErrorKind::Parse, format!("{}: {}", path.display(), e)))
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn dump_then_load() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let content = "hello toto ".repeat(200);
        store.dump(DocId(7), &content).unwrap();

        assert_eq!(store.load(DocId(7)).unwrap(), content);
        assert!(dir.path().join("0000000007.lz4").exists());
    }

    #[test]
    fn load_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.load(DocId(1)).unwrap_err().is_not_found());
    }

    #[test]
    fn corrupted_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        fs::write(dir.path().join("0000000003.lz4"), [100u8, 0, 0, 0, 0xff, 0xff]).unwrap();

        let err = store.load(DocId(3)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Parse);
    }

    #[test]
    fn dump_into_removed_root_is_store_write_error() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("docs");
        let store = FileStore::open(&root).unwrap();
        fs::remove_dir_all(&root).unwrap();

        let err = store.dump(DocId(0), "content").unwrap_err();
        assert_eq!(err.kind, ErrorKind::StoreWrite);
    }
}
