// Rust guideline compliant 2026-10-17

//! Route handlers for the Pet endpoints.

use crate::error::ApiError;
use crate::server::AppState;
use axum::body::Bytes;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::{Form, Json};
use petstore_app::{ApiResponse, AppError, ImageUpload, PetForm, PetService, UploadedFile};
use petstore_core::Pet;
use serde_json::{json, Value};
use std::sync::Arc;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Runs a store operation on the blocking pool.
async fn blocking<T, F>(state: &AppState, op: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&PetService) -> petstore_app::Result<T> + Send + 'static,
{
    let service = Arc::clone(&state.service);
    let joined = tokio::task::spawn_blocking(move || op(&service)).await;
    match joined {
        Ok(result) => result.map_err(ApiError::from),
        Err(e) => Err(ApiError(AppError::Io(std::io::Error::other(format!(
            "Store task failed: {e}"
        ))))),
    }
}

fn too_large(state: &AppState) -> ApiError {
    ApiError(AppError::PayloadTooLarge {
        limit: state.service.config().max_upload_bytes,
    })
}

fn parse_json(state: &AppState, body: Result<Bytes, BytesRejection>) -> Result<Value, ApiError> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            too_large(state)
        } else {
            ApiError(AppError::InvalidField {
                field: "body",
                message: rejection.body_text(),
            })
        }
    })?;
    serde_json::from_slice(&body).map_err(|e| {
        ApiError(AppError::InvalidField {
            field: "body",
            message: format!("Request body must be valid JSON: {e}"),
        })
    })
}

pub(crate) async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub(crate) async fn add_pet(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Pet> {
    let body = parse_json(&state, body)?;
    let pet = blocking(&state, move |service| service.add_pet(&body)).await?;
    Ok(Json(pet))
}

pub(crate) async fn update_pet(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Pet> {
    let body = parse_json(&state, body)?;
    let pet = blocking(&state, move |service| service.update_pet(&body)).await?;
    Ok(Json(pet))
}

pub(crate) async fn find_by_status(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Vec<Pet>> {
    let statuses: Vec<String> = params
        .into_iter()
        .filter(|(key, _)| key == "status")
        .map(|(_, value)| value)
        .collect();
    let pets = blocking(&state, move |service| service.find_by_status(&statuses)).await?;
    Ok(Json(pets))
}

pub(crate) async fn get_pet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Pet> {
    let pet = blocking(&state, move |service| service.get_pet(&id)).await?;
    Ok(Json(pet))
}

/// Accepts the form fields from any body; a missing or unreadable form leaves
/// the status unset, which the service rejects as an invalid status.
pub(crate) async fn update_pet_with_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    form: Option<Form<PetForm>>,
) -> ApiResult<Pet> {
    let form = form.map(|Form(form)| form).unwrap_or_default();
    let pet = blocking(&state, move |service| service.update_pet_with_form(&id, &form)).await?;
    Ok(Json(pet))
}

pub(crate) async fn delete_pet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<ApiResponse> {
    let api_key = headers
        .get("api_key")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let response = blocking(&state, move |service| {
        service.delete_pet(api_key.as_deref(), &id)
    })
    .await?;
    Ok(Json(response))
}

pub(crate) async fn upload_image(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    multipart: Option<Multipart>,
) -> ApiResult<ApiResponse> {
    let upload = match multipart {
        Some(multipart) => read_upload(&state, multipart).await?,
        None => ImageUpload::default(),
    };
    let response = blocking(&state, move |service| service.upload_image(&id, upload)).await?;
    Ok(Json(response))
}

async fn read_upload(state: &AppState, mut multipart: Multipart) -> Result<ImageUpload, ApiError> {
    let mut upload = ImageUpload::default();

    loop {
        let field = multipart.next_field().await.map_err(|e| multipart_error(state, &e))?;
        let Some(field) = field else {
            break;
        };

        match field.name() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(|e| multipart_error(state, &e))?;
                upload.file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            Some("additionalMetadata") => {
                upload.additional_metadata =
                    Some(field.text().await.map_err(|e| multipart_error(state, &e))?);
            }
            other => {
                tracing::debug!(field = other.unwrap_or(""), "Ignoring unknown multipart field");
            }
        }
    }

    Ok(upload)
}

fn multipart_error(state: &AppState, error: &MultipartError) -> ApiError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return too_large(state);
    }
    ApiError(AppError::InvalidField {
        field: "file",
        message: format!("Malformed multipart body: {}", error.body_text()),
    })
}
