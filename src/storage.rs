use crate::config::Config;
use crate::errors::ApiError;
use actix_web::web;
use futures_util::TryStreamExt as _;
use sanitize_filename::sanitize;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Creates the uploads directory and any missing parents. A second call
/// with the directory already present is a no-op.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}

pub fn resolve_destination(cfg: &Config) -> PathBuf {
    PathBuf::from(&cfg.uploads_dir)
}

/// Milliseconds since the Unix epoch. Zero if the clock is set before 1970.
pub fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Computes the stored name for an upload: `<base>-<now_ms><ext>`, where
/// the base/extension boundary is the last dot of the original name.
/// A leading-dot name like `.gitignore` counts as extensionless.
///
/// Uniqueness rests on no two same-named uploads deriving within the same
/// millisecond; derivation never consults the directory contents.
pub fn derive_filename(original: &str, now_ms: u128) -> String {
    match original.rfind('.') {
        Some(idx) if idx > 0 => {
            let (base, ext) = original.split_at(idx);
            format!("{base}-{now_ms}{ext}")
        }
        _ => format!("{original}-{now_ms}"),
    }
}

pub struct SavedFile {
    pub stored_name: String,
    pub original_name: String,
    pub size: u64,
    pub mime_type: Option<String>,
}

/// Streams one multipart file part to `<dir>/<derived name>`. The write
/// happens on the blocking pool so a slow disk never stalls the worker.
/// A partial file from an interrupted write is left in place.
pub async fn save_field(
    dir: &Path,
    mut field: actix_multipart::Field,
) -> Result<SavedFile, ApiError> {
    let content_disposition = field.content_disposition().cloned();
    let original = content_disposition
        .and_then(|cd| cd.get_filename().map(|s| s.to_string()))
        .ok_or_else(|| ApiError::BadRequest("file part has no filename".into()))?;
    let mime_type = field.content_type().map(|m| m.to_string());

    let mut data: Vec<u8> = Vec::new();
    while let Some(chunk) = field.try_next().await? {
        data.extend_from_slice(&chunk);
    }

    let original_safe = sanitize(&original);
    let stored_name = derive_filename(&original_safe, now_millis());
    let size = data.len() as u64;
    let path = dir.join(&stored_name);
    web::block(move || std::fs::write(&path, &data))
        .await
        .map_err(|e| {
            log::error!("blocking write cancelled: {e:?}");
            ApiError::Internal
        })??;

    Ok(SavedFile {
        stored_name,
        original_name: original,
        size,
        mime_type,
    })
}

/// Names of the regular files directly under `dir`, in filesystem order.
pub fn list_dir(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}
