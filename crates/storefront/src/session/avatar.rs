//! Profile picture uploads.
//!
//! Uploads never leave the session: an accepted image is inlined as a
//! `data:` URI and stored on the identity.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ValidationErrors;

/// A picked image file.
#[derive(Debug, Clone)]
pub struct AvatarUpload {
    /// MIME type reported by the picker (e.g., "image/png").
    pub mime: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl AvatarUpload {
    /// Validate the upload and encode it as a `data:` URI.
    ///
    /// # Errors
    ///
    /// Returns a field error if the file is not an image or is larger than
    /// `max_bytes`.
    pub fn into_data_uri(self, max_bytes: usize) -> Result<String, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !self.mime.starts_with("image/") {
            errors.add("avatar", "Please choose an image file");
        }
        if self.bytes.len() > max_bytes {
            errors.add(
                "avatar",
                format!("Image size must be less than {}", size_label(max_bytes)),
            );
        }
        errors.into_result()?;

        Ok(format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes)))
    }
}

/// Whole megabytes at or above 1 MiB, whole kilobytes below, rounded up.
fn size_label(bytes: usize) -> String {
    const KIB: usize = 1024;
    const MIB: usize = 1024 * KIB;
    if bytes >= MIB {
        format!("{}MB", bytes.div_ceil(MIB))
    } else {
        format!("{}KB", bytes.div_ceil(KIB))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const FIVE_MB: usize = 5 * 1024 * 1024;

    #[test]
    fn test_encodes_data_uri() {
        let upload = AvatarUpload {
            mime: "image/png".to_string(),
            bytes: b"png!".to_vec(),
        };
        assert_eq!(
            upload.into_data_uri(FIVE_MB).unwrap(),
            "data:image/png;base64,cG5nIQ=="
        );
    }

    #[test]
    fn test_rejects_oversized_image() {
        let upload = AvatarUpload {
            mime: "image/jpeg".to_string(),
            bytes: vec![0; FIVE_MB + 1],
        };
        let errors = upload.into_data_uri(FIVE_MB).unwrap_err();
        assert_eq!(
            errors.first().unwrap().message,
            "Image size must be less than 5MB"
        );
    }

    #[test]
    fn test_limit_below_one_megabyte_is_shown_in_kilobytes() {
        let upload = AvatarUpload {
            mime: "image/png".to_string(),
            bytes: vec![0; 600 * 1024],
        };
        let errors = upload.into_data_uri(512 * 1024).unwrap_err();
        assert_eq!(
            errors.first().unwrap().message,
            "Image size must be less than 512KB"
        );
    }

    #[test]
    fn test_size_label_rounds_up() {
        assert_eq!(size_label(FIVE_MB), "5MB");
        assert_eq!(size_label(FIVE_MB + 1), "6MB");
        assert_eq!(size_label(1000), "1KB");
    }

    #[test]
    fn test_accepts_image_at_limit() {
        let upload = AvatarUpload {
            mime: "image/jpeg".to_string(),
            bytes: vec![0; 16],
        };
        assert!(upload.into_data_uri(16).is_ok());
    }

    #[test]
    fn test_rejects_non_image() {
        let upload = AvatarUpload {
            mime: "application/pdf".to_string(),
            bytes: vec![1, 2, 3],
        };
        assert!(upload.into_data_uri(FIVE_MB).unwrap_err().has("avatar"));
    }
}
