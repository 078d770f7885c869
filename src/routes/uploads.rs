use crate::{config::Config, errors::ApiError, models::file::FileDescriptor, storage};
use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use futures_util::TryStreamExt as _;
use serde::Serialize;

#[derive(Serialize)]
struct UploadStatus {
    status: &'static str,
    message: &'static str,
}

#[derive(Serialize)]
struct MultiUploadResp {
    files: Vec<FileDescriptor>,
}

// Unread fields must be consumed before the next one can be polled.
async fn drain(mut field: actix_multipart::Field) -> Result<(), ApiError> {
    while field.try_next().await?.is_some() {}
    Ok(())
}

pub async fn upload_single(
    cfg: web::Data<Config>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let dir = storage::resolve_destination(&cfg);
    while let Some(field) = payload.try_next().await? {
        if field.name() != Some("file") {
            drain(field).await?;
            continue;
        }
        let saved = storage::save_field(&dir, field).await?;
        log::info!("stored {} ({} bytes)", saved.stored_name, saved.size);
        // Consume trailing parts so the connection stays reusable.
        while let Some(extra) = payload.try_next().await? {
            drain(extra).await?;
        }
        return Ok(HttpResponse::Created().json(UploadStatus {
            status: "success",
            message: "File upload successfully!!",
        }));
    }
    Err(ApiError::BadRequest("no `file` part in request".into()))
}

pub async fn upload_multiple(
    cfg: web::Data<Config>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let dir = storage::resolve_destination(&cfg);
    let mut files = Vec::new();
    while let Some(field) = payload.try_next().await? {
        if field.name() != Some("files") {
            drain(field).await?;
            continue;
        }
        let saved = storage::save_field(&dir, field).await?;
        log::info!("stored {} ({} bytes)", saved.stored_name, saved.size);
        files.push(FileDescriptor::from(saved));
    }
    // Zero parts is a valid request and writes nothing.
    Ok(HttpResponse::Created().json(MultiUploadResp { files }))
}
