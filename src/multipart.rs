//! Multipart form construction helpers.

use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;

use crate::error::RestError;

/// Build a multipart form from a serializable value.
///
/// The value must serialize to a JSON object; each top-level field becomes a
/// text part. Null fields are skipped, non-string scalars are stringified.
pub fn form_from<B: Serialize>(body: &B) -> Result<Form, RestError> {
    let mut form = Form::new();
    for (name, text) in text_fields(body)? {
        form = form.text(name, text);
    }
    Ok(form)
}

/// Flatten a serializable value into `(name, text)` form fields.
fn text_fields<B: Serialize>(body: &B) -> Result<Vec<(String, String)>, RestError> {
    let value = serde_json::to_value(body)?;
    let Value::Object(fields) = value else {
        return Err(RestError::InvalidInput(
            "multipart body must serialize to a JSON object".to_string(),
        ));
    };

    let mut out = Vec::with_capacity(fields.len());
    for (name, field) in fields {
        let text = match field {
            Value::Null => continue,
            Value::String(s) => s,
            other => other.to_string(),
        };
        out.push((name, text));
    }
    Ok(out)
}

/// Build a file part for use with `post_multipart_form`.
pub fn file_part(
    bytes: Vec<u8>,
    file_name: impl Into<String>,
    mime: &str,
) -> Result<Part, RestError> {
    Part::bytes(bytes)
        .file_name(file_name.into())
        .mime_str(mime)
        .map_err(|e| RestError::InvalidInput(format!("invalid mime type '{mime}': {e}")))
}
