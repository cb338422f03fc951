//! Thumbnail asset naming and URL derivation.
//!
//! Thumbnails are written straight to their final location under the assets
//! root and served by this process, so names must be unguessable: 32 random
//! bytes, base64url without padding, plus the extension for the declared type.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;

/// File extension for an accepted thumbnail content type.
pub fn media_type_to_ext(content_type: &str) -> &'static str {
    match content_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        _ => "bin",
    }
}

/// Generate a random asset filename for the given content type.
pub fn random_asset_name(content_type: &str) -> String {
    let mut raw = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut raw);
    format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(raw),
        media_type_to_ext(content_type)
    )
}

/// Public URL under which an asset file is served.
pub fn asset_url(base_url: &str, filename: &str) -> String {
    format!("{}/assets/{}", base_url.trim_end_matches('/'), filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_to_ext() {
        assert_eq!(media_type_to_ext("image/jpeg"), "jpg");
        assert_eq!(media_type_to_ext("image/png"), "png");
        assert_eq!(media_type_to_ext("application/octet-stream"), "bin");
    }

    #[test]
    fn test_random_asset_name_shape() {
        let name = random_asset_name("image/png");
        let (stem, ext) = name.rsplit_once('.').unwrap();
        assert_eq!(ext, "png");
        // 32 bytes base64url without padding is 43 characters
        assert_eq!(stem.len(), 43);
        assert!(!stem.contains('='));
        assert!(!stem.contains('/'));
    }

    #[test]
    fn test_random_asset_names_are_unique() {
        assert_ne!(random_asset_name("image/jpeg"), random_asset_name("image/jpeg"));
    }

    #[test]
    fn test_asset_url_join() {
        assert_eq!(
            asset_url("http://localhost:8091", "abc.png"),
            "http://localhost:8091/assets/abc.png"
        );
        assert_eq!(
            asset_url("http://localhost:8091/", "abc.png"),
            "http://localhost:8091/assets/abc.png"
        );
    }
}
