//! Image files selected for upload.
//!
//! A selection is read fully into memory and checked before it is accepted:
//! the content is sniffed for a known image signature, falling back to the
//! file extension. Anything else is rejected with a validation error and
//! never reaches the network.

use std::path::{Path, PathBuf};

use image::ImageFormat;
use thiserror::Error;

/// Errors raised while selecting an image
#[derive(Debug, Error)]
pub enum ImageFileError {
    #[error("Please select a valid image file")]
    NotAnImage,

    #[error("The selected file is empty")]
    Empty,

    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An image held in memory, ready to be sent to the service
#[derive(Debug, Clone)]
pub struct ImageFile {
    name: Option<String>,
    bytes: Vec<u8>,
    format: ImageFormat,
}

impl ImageFile {
    /// Read and validate an image from disk
    pub fn from_path(path: &Path) -> Result<Self, ImageFileError> {
        let bytes = std::fs::read(path).map_err(|source| ImageFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string());
        Self::from_bytes(name, bytes)
    }

    /// Validate an in-memory image (e.g. a dropped file without a path)
    pub fn from_bytes(name: Option<String>, bytes: Vec<u8>) -> Result<Self, ImageFileError> {
        if bytes.is_empty() {
            return Err(ImageFileError::Empty);
        }

        let format = image::guess_format(&bytes)
            .ok()
            .or_else(|| name.as_deref().and_then(|n| ImageFormat::from_path(n).ok()))
            .ok_or(ImageFileError::NotAnImage)?;

        let name = name.filter(|n| !n.trim().is_empty());
        Ok(Self {
            name,
            bytes,
            format,
        })
    }

    /// Original file name, if known
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name sent with the multipart `image` field
    pub fn upload_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => {
                let ext = self.format.extensions_str().first().copied().unwrap_or("png");
                format!("image.{}", ext)
            }
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// MIME type derived from the detected format
    pub fn mime(&self) -> &'static str {
        self.format.to_mime_type()
    }
}

/// Encode a small solid PNG for tests
#[cfg(test)]
pub(crate) fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255]));
    let mut out = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut out), ImageFormat::Png)
        .unwrap();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_content_is_sniffed() {
        let file = ImageFile::from_bytes(Some("cat.dat".to_string()), tiny_png()).unwrap();
        assert_eq!(file.format(), ImageFormat::Png);
        assert_eq!(file.mime(), "image/png");
        assert_eq!(file.name(), Some("cat.dat"));
    }

    #[test]
    fn test_extension_fallback() {
        // Not a decodable JPEG, but the extension marks it as an image
        let file = ImageFile::from_bytes(Some("photo.jpg".to_string()), b"not really".to_vec())
            .unwrap();
        assert_eq!(file.format(), ImageFormat::Jpeg);
        assert_eq!(file.mime(), "image/jpeg");
    }

    #[test]
    fn test_text_file_is_rejected() {
        let err = ImageFile::from_bytes(Some("notes.txt".to_string()), b"hello".to_vec())
            .unwrap_err();
        assert!(matches!(err, ImageFileError::NotAnImage));
        assert_eq!(err.to_string(), "Please select a valid image file");
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let err = ImageFile::from_bytes(Some("a.png".to_string()), Vec::new()).unwrap_err();
        assert!(matches!(err, ImageFileError::Empty));
    }

    #[test]
    fn test_upload_name_without_original_name() {
        let file = ImageFile::from_bytes(None, tiny_png()).unwrap();
        assert_eq!(file.name(), None);
        assert_eq!(file.upload_name(), "image.png");
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secret.png");
        std::fs::write(&path, tiny_png()).unwrap();

        let file = ImageFile::from_path(&path).unwrap();
        assert_eq!(file.name(), Some("secret.png"));
        assert!(!file.is_empty());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = ImageFile::from_path(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, ImageFileError::Io { .. }));
    }
}
