use std::io;
use std::path::Path;

use tokio::fs::{self, File};

use crate::GrabError;

/// Ensure output directory exists; create if missing.
pub async fn ensure_output_dir(dir: &Path) -> Result<(), GrabError> {
    match fs::metadata(dir).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(GrabError::filesystem(
            dir,
            io::Error::new(io::ErrorKind::AlreadyExists, "path is not a directory"),
        )),
        Err(err) if err.kind() == io::ErrorKind::NotFound => fs::create_dir_all(dir)
            .await
            .map_err(|err| GrabError::filesystem(dir, err)),
        Err(err) => Err(GrabError::filesystem(dir, err)),
    }
}

/// True when something already exists at `path`, false when it is missing.
/// Any other lookup failure (blocked parent, permissions) is a filesystem
/// error.
pub async fn destination_taken(path: &Path) -> Result<bool, GrabError> {
    match fs::metadata(path).await {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(GrabError::filesystem(path, err)),
    }
}

/// Creates (or truncates) the file an image is streamed into. Writes are not
/// atomic: an interrupted transfer leaves a partial file behind.
pub async fn create_destination(path: &Path) -> Result<File, GrabError> {
    File::create(path)
        .await
        .map_err(|err| GrabError::filesystem(path, err))
}
