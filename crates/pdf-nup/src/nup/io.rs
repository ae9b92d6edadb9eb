//! Document I/O operations

use crate::types::*;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    if !tokio::fs::try_exists(&path).await? {
        return Err(NupError::FileNotFound(path));
    }

    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    log::debug!("Loaded {} ({} pages)", path.display(), doc.get_pages().len());
    Ok(doc)
}

/// Save the composed document.
///
/// The document is serialized in memory first, so nothing is written if
/// serialization fails.
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.compress();
        doc.save_to(&mut writer)?;
        Ok::<_, NupError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Create `dir` if needed and return the path of `file_name` inside it.
///
/// An existing directory is not an error.
pub async fn prepare_output_path(dir: impl AsRef<Path>, file_name: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir).await?;
    Ok(dir.join(file_name))
}
