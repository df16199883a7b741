use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use triboard_core::BoardResult;

/// Atomic file writer that prevents data corruption
/// Uses write-to-temp-file → atomic-rename pattern for safety
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically, creating missing parent directories
    pub async fn write_atomic(path: &Path, data: &[u8]) -> BoardResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).await?;

        // Temp file in the same directory so the rename stays on one filesystem
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        fs::write(temp_file.path(), data).await?;
        temp_file.persist(path).map_err(|e| e.error)?;

        tracing::debug!("Atomically wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    /// Read a whole file, or `None` if it does not exist
    pub async fn read_optional(path: &Path) -> BoardResult<Option<Vec<u8>>> {
        match fs::read(path).await {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_atomic_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nested").join("store.json");

        AtomicWriter::write_atomic(&file_path, b"{}").await.unwrap();

        let read_data = AtomicWriter::read_optional(&file_path).await.unwrap();
        assert_eq!(read_data.as_deref(), Some(&b"{}"[..]));
    }

    #[tokio::test]
    async fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("store.json");

        AtomicWriter::write_atomic(&file_path, b"First").await.unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second").await.unwrap();

        let read_data = AtomicWriter::read_optional(&file_path).await.unwrap();
        assert_eq!(read_data.as_deref(), Some(&b"Second"[..]));
    }

    #[tokio::test]
    async fn test_read_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let read_data = AtomicWriter::read_optional(&dir.path().join("missing.json"))
            .await
            .unwrap();
        assert!(read_data.is_none());
    }
}
