//! Common utilities for file upload handlers

use axum::extract::Multipart;
use reelhost_core::AppError;

/// Extract file data and declared content type from a multipart form.
/// Exactly one file field with the expected name is accepted.
pub async fn extract_multipart_file(
    mut multipart: Multipart,
    expected_field: &str,
) -> Result<(Vec<u8>, String), AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name == expected_field {
            if file_data.is_some() {
                return Err(AppError::InvalidInput(format!(
                    "Multiple '{}' fields are not allowed; send exactly one",
                    expected_field
                )));
            }
            if field.file_name().is_none() {
                return Err(AppError::InvalidInput(format!(
                    "Field '{}' must be a file",
                    expected_field
                )));
            }
            content_type = field.content_type().map(|s: &str| s.to_string());

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

            file_data = Some(data.to_vec());
        }
    }

    let file_data = file_data
        .ok_or_else(|| AppError::InvalidInput(format!("No '{}' file provided", expected_field)))?;
    let content_type =
        content_type.unwrap_or_else(|| "application/octet-stream".to_string());

    Ok((file_data, content_type))
}

/// Validate file size against the configured ceiling.
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} MB",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}

/// Normalize MIME type by stripping parameters (e.g. "video/mp4; codecs=avc1" -> "video/mp4").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Validate content type against an allowlist. Compares the normalized MIME
/// type only, so parameters cannot bypass the check.
pub fn validate_content_type(content_type: &str, allowed_types: &[&str]) -> Result<(), AppError> {
    let normalized = normalize_mime_type(content_type).to_lowercase();
    if !allowed_types.iter().any(|ct| normalized == ct.to_lowercase()) {
        return Err(AppError::InvalidInput(format!(
            "Invalid content type. Allowed types: {}",
            allowed_types.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelhost_core::constants;

    #[test]
    fn test_validate_file_size() {
        assert!(validate_file_size(1024, constants::MAX_THUMBNAIL_UPLOAD_BYTES).is_ok());
        assert!(
            validate_file_size(constants::MAX_THUMBNAIL_UPLOAD_BYTES, constants::MAX_THUMBNAIL_UPLOAD_BYTES)
                .is_ok()
        );
        let err = validate_file_size(
            constants::MAX_THUMBNAIL_UPLOAD_BYTES + 1,
            constants::MAX_THUMBNAIL_UPLOAD_BYTES,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::PayloadTooLarge(_)));
    }

    #[test]
    fn test_validate_content_type_exact_match() {
        assert!(validate_content_type("video/mp4", &[constants::VIDEO_CONTENT_TYPE]).is_ok());
        assert!(validate_content_type("video/webm", &[constants::VIDEO_CONTENT_TYPE]).is_err());
        // Wrong type is rejected regardless of byte content elsewhere
        assert!(validate_content_type("image/gif", &constants::THUMBNAIL_CONTENT_TYPES).is_err());
        assert!(validate_content_type("image/png", &constants::THUMBNAIL_CONTENT_TYPES).is_ok());
    }

    #[test]
    fn test_validate_content_type_strips_parameters() {
        assert!(
            validate_content_type("video/mp4; codecs=avc1.42E01E", &[constants::VIDEO_CONTENT_TYPE])
                .is_ok()
        );
        assert!(validate_content_type("VIDEO/MP4", &[constants::VIDEO_CONTENT_TYPE]).is_ok());
    }
}
