use crate::keys::{generate_filename, validate_filename};
use crate::traits::{
    Destination, StorageError, StorageResult, StoredFile, UploadSink, UploadStorage,
};
use async_trait::async_trait;
use navsite_core::constants::{LOGO_PATH_PREFIX, SVG_UPLOAD_SUBDIR};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Attempts at claiming a fresh filename before giving up
const MAX_CREATE_ATTEMPTS: u32 = 16;

/// Local filesystem storage for SVG uploads
#[derive(Clone)]
pub struct LocalSvgStorage {
    base_path: PathBuf,
}

impl LocalSvgStorage {
    /// Create a new LocalSvgStorage instance
    ///
    /// # Arguments
    /// * `upload_root` - Directory served at `/uploads`; files are written to `<upload_root>/svg`
    pub async fn new(upload_root: impl AsRef<Path>) -> StorageResult<Self> {
        let base_path = upload_root.as_ref().join(SVG_UPLOAD_SUBDIR);

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalSvgStorage { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn file_path(&self, filename: &str) -> StorageResult<PathBuf> {
        validate_filename(filename)?;
        Ok(self.base_path.join(filename))
    }

    fn destination_at(&self, original_filename: &str, timestamp_millis: i64) -> Destination {
        let filename = generate_filename(original_filename, timestamp_millis);
        Destination {
            public_path: format!("{}{}", LOGO_PATH_PREFIX, filename),
            filename,
        }
    }
}

#[async_trait]
impl UploadStorage for LocalSvgStorage {
    fn destination(
        &self,
        original_filename: &str,
        _content_type: &str,
        attempt: u32,
    ) -> StorageResult<Destination> {
        let millis = chrono::Utc::now().timestamp_millis() + i64::from(attempt);
        Ok(self.destination_at(original_filename, millis))
    }

    async fn create(
        &self,
        original_filename: &str,
        content_type: &str,
    ) -> StorageResult<Box<dyn UploadSink>> {
        let mut recreated_dir = false;

        for attempt in 0..MAX_CREATE_ATTEMPTS {
            let destination = self.destination(original_filename, content_type, attempt)?;
            let path = self.file_path(&destination.filename)?;

            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => {
                    tracing::debug!(path = %path.display(), attempt, "Upload file created");
                    return Ok(Box::new(LocalSink {
                        file,
                        path,
                        destination,
                        written: 0,
                        started: Instant::now(),
                    }));
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    tracing::debug!(path = %path.display(), "Upload filename taken, retrying");
                }
                Err(e) if e.kind() == ErrorKind::NotFound && !recreated_dir => {
                    tracing::warn!(
                        dir = %self.base_path.display(),
                        "Upload directory missing, recreating"
                    );
                    fs::create_dir_all(&self.base_path).await.map_err(|e| {
                        StorageError::UploadFailed(format!(
                            "Failed to recreate storage directory {}: {}",
                            self.base_path.display(),
                            e
                        ))
                    })?;
                    recreated_dir = true;
                }
                Err(e) => {
                    return Err(StorageError::UploadFailed(format!(
                        "Failed to create file {}: {}",
                        path.display(),
                        e
                    )));
                }
            }
        }

        Err(StorageError::UploadFailed(format!(
            "No free filename for {} after {} attempts",
            original_filename, MAX_CREATE_ATTEMPTS
        )))
    }

    async fn read(&self, filename: &str) -> StorageResult<Vec<u8>> {
        let path = self.file_path(filename)?;

        fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(filename.to_string()),
            _ => StorageError::ReadFailed(format!(
                "Failed to read file {}: {}",
                path.display(),
                e
            )),
        })
    }

    async fn delete(&self, filename: &str) -> StorageResult<()> {
        let path = self.file_path(filename)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(());
        }

        fs::remove_file(&path).await.map_err(|e| {
            StorageError::DeleteFailed(format!("Failed to delete file {}: {}", path.display(), e))
        })?;

        tracing::info!(path = %path.display(), "Local storage delete successful");

        Ok(())
    }
}

struct LocalSink {
    file: fs::File,
    path: PathBuf,
    destination: Destination,
    written: u64,
    started: Instant,
}

#[async_trait]
impl UploadSink for LocalSink {
    fn destination(&self) -> &Destination {
        &self.destination
    }

    fn bytes_written(&self) -> u64 {
        self.written
    }

    async fn write_chunk(&mut self, chunk: &[u8]) -> StorageResult<()> {
        self.file.write_all(chunk).await.map_err(|e| {
            StorageError::UploadFailed(format!(
                "Failed to write file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        self.written += chunk.len() as u64;
        Ok(())
    }

    async fn finish(mut self: Box<Self>) -> StorageResult<StoredFile> {
        self.file.flush().await?;
        self.file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!(
                "Failed to sync file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::info!(
            path = %self.path.display(),
            size_bytes = self.written,
            duration_ms = self.started.elapsed().as_secs_f64() * 1000.0,
            "Local storage upload successful"
        );

        let Destination {
            filename,
            public_path,
        } = self.destination;

        Ok(StoredFile {
            filename,
            public_path,
            size: self.written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[tokio::test]
    async fn creates_svg_subdirectory() {
        let dir = tempdir().unwrap();
        let storage = LocalSvgStorage::new(dir.path()).await.unwrap();

        assert_eq!(storage.base_path(), dir.path().join("svg").as_path());
        assert!(storage.base_path().is_dir());
    }

    #[tokio::test]
    async fn streams_chunks_and_reads_back() {
        let dir = tempdir().unwrap();
        let storage = LocalSvgStorage::new(dir.path()).await.unwrap();

        let mut sink = storage.create("logo.svg", "image/svg+xml").await.unwrap();
        sink.write_chunk(b"<svg>").await.unwrap();
        sink.write_chunk(b"</svg>").await.unwrap();
        assert_eq!(sink.bytes_written(), 11);

        let stored = sink.finish().await.unwrap();
        assert!(stored.filename.ends_with("-logo.svg"));
        assert_eq!(stored.public_path, format!("/uploads/svg/{}", stored.filename));
        assert_eq!(stored.size, 11);

        let data = storage.read(&stored.filename).await.unwrap();
        assert_eq!(data, b"<svg></svg>");
    }

    #[tokio::test]
    async fn concurrent_names_never_overwrite() {
        let dir = tempdir().unwrap();
        let storage = LocalSvgStorage::new(dir.path()).await.unwrap();

        let first = storage.create("same.svg", "image/svg+xml").await.unwrap();
        let second = storage.create("same.svg", "image/svg+xml").await.unwrap();

        assert_ne!(first.destination().filename, second.destination().filename);
    }

    #[tokio::test]
    async fn delete_removes_file_and_tolerates_missing() {
        let dir = tempdir().unwrap();
        let storage = LocalSvgStorage::new(dir.path()).await.unwrap();

        let mut sink = storage.create("x.svg", "image/svg+xml").await.unwrap();
        sink.write_chunk(b"junk").await.unwrap();
        let filename = sink.destination().filename.clone();
        drop(sink);

        storage.delete(&filename).await.unwrap();
        assert!(!storage.base_path().join(&filename).exists());
        assert!(storage.delete(&filename).await.is_ok());
        assert!(matches!(
            storage.read(&filename).await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn path_traversal_rejected() {
        let dir = tempdir().unwrap();
        let storage = LocalSvgStorage::new(dir.path()).await.unwrap();

        let result = storage.read("../../../etc/passwd").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = storage.delete("../secret.svg").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn recreates_missing_directory_on_create() {
        let dir = tempdir().unwrap();
        let storage = LocalSvgStorage::new(dir.path()).await.unwrap();
        std::fs::remove_dir_all(storage.base_path()).unwrap();

        let mut sink = storage.create("late.svg", "image/svg+xml").await.unwrap();
        sink.write_chunk(b"<svg></svg>").await.unwrap();
        let stored = sink.finish().await.unwrap();

        assert!(storage.base_path().join(&stored.filename).is_file());
    }

    #[tokio::test]
    async fn strategy_names_uploads_through_trait_object() {
        let dir = tempdir().unwrap();
        let storage: Arc<dyn UploadStorage> =
            Arc::new(LocalSvgStorage::new(dir.path()).await.unwrap());

        let first = storage
            .destination("My Logo.svg", "image/svg+xml", 0)
            .unwrap();
        let (millis, base) = first.filename.split_once('-').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(base, "My_Logo.svg");
        assert_eq!(first.public_path, format!("/uploads/svg/{}", first.filename));

        let later = storage
            .destination("My Logo.svg", "image/svg+xml", 3)
            .unwrap();
        let later_millis: i64 = later.filename.split_once('-').unwrap().0.parse().unwrap();
        assert!(later_millis >= millis.parse::<i64>().unwrap() + 3);

        let sink = storage.create("My Logo.svg", "image/svg+xml").await.unwrap();
        assert!(sink.destination().filename.ends_with("-My_Logo.svg"));
    }

    #[test]
    fn destination_is_pure_naming() {
        let storage = LocalSvgStorage {
            base_path: PathBuf::from("/tmp/unused/svg"),
        };
        let destination = storage.destination_at("../../evil name.svg", 42);
        assert_eq!(destination.filename, "42-evil_name.svg");
        assert_eq!(destination.public_path, "/uploads/svg/42-evil_name.svg");
    }
}
