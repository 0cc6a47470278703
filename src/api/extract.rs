//! Form body extraction for the login action.
//!
//! Accepts `application/x-www-form-urlencoded` and `multipart/form-data`
//! bodies and flattens both into [`FormData`].

use std::collections::BTreeMap;

use axum::extract::{Form, FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use serde_json::json;

use crate::domain::form::FormData;
use crate::error::AppError;

/// Extracts the submitted form fields from the request body.
///
/// File parts of multipart bodies are skipped; only text fields are kept.
///
/// # Errors
///
/// - [`AppError::UnsupportedMediaType`] for content types other than the two
///   form encodings
/// - [`AppError::BadRequest`] when the body cannot be decoded
pub async fn form_data(req: Request) -> Result<FormData, AppError> {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    if content_type.starts_with("multipart/form-data") {
        multipart_form_data(req).await
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(fields) = Form::<BTreeMap<String, String>>::from_request(req, &())
            .await
            .map_err(|e| {
                AppError::bad_request(format!("Malformed form body: {e}"), json!({}))
            })?;

        Ok(fields.into_iter().collect())
    } else {
        Err(AppError::unsupported_media_type(
            "Expected a form-encoded request body",
            json!({ "content_type": content_type }),
        ))
    }
}

/// Collects the text fields of a multipart body.
async fn multipart_form_data(req: Request) -> Result<FormData, AppError> {
    let mut multipart = Multipart::from_request(req, &()).await.map_err(|e| {
        AppError::bad_request(format!("Malformed multipart body: {e}"), json!({}))
    })?;

    let mut form = FormData::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::bad_request(format!("Malformed multipart body: {e}"), json!({}))
    })? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if field.file_name().is_some() {
            // file upload, not a form value
            continue;
        }

        let value = field.text().await.map_err(|e| {
            AppError::bad_request(format!("Malformed multipart field: {e}"), json!({}))
        })?;

        form.insert(name, value);
    }

    Ok(form)
}
