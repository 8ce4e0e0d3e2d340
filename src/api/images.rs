//! Base64 image fields in JSON request bodies.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::ApiError;

/// Decode one base64 image field, enforcing the size limit.
///
/// Accepts plain base64 or a `data:<mime>;base64,` URL. Whitespace is
/// ignored. The size check runs before decoding so oversized uploads are
/// rejected without allocating the decoded buffer.
pub fn decode_image_field(field: &str, data: &str, max_bytes: usize) -> Result<Vec<u8>, ApiError> {
    let payload = strip_data_url(data);
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    let estimated = compact.len() / 4 * 3;
    if estimated > max_bytes + 2 {
        tracing::warn!(field, estimated, max_bytes, "Rejected oversized upload");
        return Err(ApiError::ImageTooLarge {
            size: estimated,
            max: max_bytes,
        });
    }

    let bytes = STANDARD.decode(compact.as_bytes()).map_err(|e| {
        tracing::warn!(field, %e, "Rejected upload with invalid base64");
        ApiError::InvalidBase64 {
            field: field.to_string(),
        }
    })?;

    if bytes.len() > max_bytes {
        tracing::warn!(field, size = bytes.len(), max_bytes, "Rejected oversized upload");
        return Err(ApiError::ImageTooLarge {
            size: bytes.len(),
            max: max_bytes,
        });
    }

    Ok(bytes)
}

fn strip_data_url(data: &str) -> &str {
    let trimmed = data.trim();
    if trimmed.starts_with("data:") {
        if let Some((_, payload)) = trimmed.split_once(";base64,") {
            return payload;
        }
    }
    trimmed
}
