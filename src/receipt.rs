use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::Rejection;

pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Png,
    Jpeg,
}

impl ImageType {
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let media_type = media_type.trim();
        if media_type.eq_ignore_ascii_case("image/png") {
            Some(ImageType::Png)
        } else if media_type.eq_ignore_ascii_case("image/jpeg") {
            Some(ImageType::Jpeg)
        } else {
            None
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            ImageType::Png => "image/png",
            ImageType::Jpeg => "image/jpeg",
        }
    }
}

/// A file the user offered, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptCandidate {
    pub media_type: String,
    pub path: PathBuf,
}

impl ReceiptCandidate {
    pub fn new(media_type: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            media_type: media_type.into(),
            path: path.into(),
        }
    }

    /// Declares the media type from the file extension, as a browser file
    /// input would.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            media_type: media_type_for_path(&path).to_string(),
            path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptFile {
    pub image_type: ImageType,
    pub path: PathBuf,
}

impl ReceiptFile {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }
}

/// Holds at most one validated receipt. Rejections never touch it.
#[derive(Debug, Default)]
pub struct ReceiptSelector {
    file: Option<ReceiptFile>,
}

impl ReceiptSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, candidate: ReceiptCandidate) -> Result<&ReceiptFile, Rejection> {
        let Some(image_type) = ImageType::from_media_type(&candidate.media_type) else {
            warn!(media_type = %candidate.media_type, "receipt rejected");
            return Err(Rejection::UnsupportedFileType {
                media_type: candidate.media_type,
            });
        };

        info!(path = %candidate.path.display(), media_type = image_type.media_type(), "receipt accepted");
        Ok(self.file.insert(ReceiptFile {
            image_type,
            path: candidate.path,
        }))
    }

    pub fn file(&self) -> Option<&ReceiptFile> {
        self.file.as_ref()
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }
}

pub fn media_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" | "jfif" | "pjpeg" | "pjp" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "heic" => "image/heic",
        "tif" | "tiff" => "image/tiff",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
