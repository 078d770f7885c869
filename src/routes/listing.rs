use crate::{config::Config, errors::ApiError, storage};
use actix_web::{HttpResponse, web};
use serde::Serialize;

#[derive(Serialize)]
struct FileListResp {
    #[serde(rename = "fileList")]
    file_list: Vec<String>,
}

/// Enumeration order is whatever the filesystem yields; callers must not
/// depend on it.
pub async fn list_files(cfg: web::Data<Config>) -> Result<HttpResponse, ApiError> {
    let dir = storage::resolve_destination(&cfg);
    let file_list = web::block(move || storage::list_dir(&dir))
        .await
        .map_err(|e| {
            log::error!("blocking read cancelled: {e:?}");
            ApiError::Internal
        })??;
    Ok(HttpResponse::Ok().json(FileListResp { file_list }))
}
