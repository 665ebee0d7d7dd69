//! `POST /upload`: stores the submitted image and records a new report.
//!
//! The request is `multipart/form-data` with three parts: `imageFile`,
//! `location` and `description`. All three must be present before anything
//! is written to disk.

use crate::config::Settings;
use crate::services::reports::store;
use actix_multipart::Multipart;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use common::api::{ApiError, ApiMessage, DESCRIPTION_FIELD, IMAGE_FIELD, LOCATION_FIELD};
use futures_util::StreamExt;
use log::{error, info};
use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

const UPLOAD_OK: &str = "Archivo y datos del reporte recibidos correctamente";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Faltan datos en la solicitud")]
    MissingFields,
    #[error("No se ha recibido ninguna imagen")]
    NoImage,
    #[error("Solicitud multipart inválida: {0}")]
    Multipart(String),
    #[error("{0}")]
    Storage(String),
}

impl ResponseError for UploadError {
    fn status_code(&self) -> StatusCode {
        match self {
            UploadError::MissingFields | UploadError::NoImage | UploadError::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            UploadError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiError::new(self.to_string()))
    }
}

/// Image part as received, before validation.
struct ImagePart {
    filename: Option<String>,
    bytes: Vec<u8>,
}

#[derive(Default)]
struct UploadForm {
    image: Option<ImagePart>,
    location: Option<String>,
    description: Option<String>,
}

pub async fn process(
    payload: Multipart,
    settings: web::Data<Settings>,
) -> Result<HttpResponse, UploadError> {
    let form = read_form(payload).await?;

    let (Some(image), Some(location), Some(description)) =
        (form.image, form.location, form.description)
    else {
        return Err(UploadError::MissingFields);
    };

    let filename = match image.filename.as_deref() {
        Some(name) if !name.trim().is_empty() && !image.bytes.is_empty() => name.to_string(),
        _ => return Err(UploadError::NoImage),
    };

    let upload_dir = settings.upload_dir.clone();
    let db_path = settings.database_path.clone();

    let (id, stored_name) = web::block(move || {
        let stored_name = store_image(&upload_dir, &filename, &image.bytes)?;
        let id = store::insert_report(&db_path, &stored_name, &location, &description)?;
        Ok::<_, String>((id, stored_name))
    })
    .await
    .map_err(|e| UploadError::Storage(e.to_string()))?
    .map_err(|e| {
        error!("Error storing report: {}", e);
        UploadError::Storage(e)
    })?;

    info!("Report {} stored with image {}", id, stored_name);
    Ok(HttpResponse::Ok().json(ApiMessage::new(UPLOAD_OK)))
}

/// Drains the multipart stream into an `UploadForm`. Unknown parts are skipped.
async fn read_form(mut payload: Multipart) -> Result<UploadForm, UploadError> {
    let mut form = UploadForm::default();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| UploadError::Multipart(e.to_string()))?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()));

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| UploadError::Multipart(e.to_string()))?;
            bytes.extend_from_slice(&chunk);
        }

        match name.as_deref() {
            Some(IMAGE_FIELD) => form.image = Some(ImagePart { filename, bytes }),
            Some(LOCATION_FIELD) => form.location = Some(into_text(bytes)?),
            Some(DESCRIPTION_FIELD) => form.description = Some(into_text(bytes)?),
            _ => {}
        }
    }

    Ok(form)
}

fn into_text(bytes: Vec<u8>) -> Result<String, UploadError> {
    String::from_utf8(bytes).map_err(|_| UploadError::Multipart("campo de texto no es UTF-8".into()))
}

/// Writes the image under `upload_dir` and returns the name it was stored as.
///
/// An existing file with the same name is never overwritten; the new one gets
/// a unique prefix instead. Files are created with `create_new`, so two
/// uploads racing on the same name cannot both claim it.
fn store_image(upload_dir: &Path, filename: &str, bytes: &[u8]) -> Result<String, String> {
    fs::create_dir_all(upload_dir).map_err(|e| e.to_string())?;

    let name = sanitize_filename(filename);
    match write_new(&upload_dir.join(&name), bytes) {
        Ok(()) => Ok(name),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            let unique = format!("{}_{}", Uuid::new_v4().simple(), name);
            write_new(&upload_dir.join(&unique), bytes).map_err(|e| e.to_string())?;
            Ok(unique)
        }
        Err(e) => Err(e.to_string()),
    }
}

fn write_new(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(bytes)
}

/// Keeps only the last path component and replaces anything outside
/// `[A-Za-z0-9._-]` so the name cannot escape the upload folder.
fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        format!("{}.bin", Uuid::new_v4().simple())
    } else {
        cleaned.to_string()
    }
}
