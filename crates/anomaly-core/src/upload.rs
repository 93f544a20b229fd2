//! Client-side checks on the two uploaded files.
//!
//! Only the browser-reported MIME type and the file name are inspected;
//! contents are never opened.

use thiserror::Error;

/// What the browser tells us about a picked file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    pub fn is_png(&self) -> bool {
        self.mime.contains("png")
    }

    /// TIFF by MIME type, or by a `.tiff` suffix in any case.
    pub fn is_tiff(&self) -> bool {
        self.mime.contains("tiff") || self.name.to_lowercase().ends_with(".tiff")
    }

    /// Size as shown next to the file name, e.g. `1.25 MB`.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size as f64 / 1024.0 / 1024.0)
    }
}

/// Reasons a submission is refused before any request is made. The display
/// strings are what the user sees.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please upload both RGB and TIFF files")]
    MissingInput,
    #[error("RGB file must be a PNG image")]
    RgbNotPng,
    #[error("Point cloud file must be a TIFF file")]
    PointCloudNotTiff,
}

pub fn validate(rgb: Option<&FileMeta>, tiff: Option<&FileMeta>) -> Result<(), UploadError> {
    let (Some(rgb), Some(tiff)) = (rgb, tiff) else {
        return Err(UploadError::MissingInput);
    };
    if !rgb.is_png() {
        return Err(UploadError::RgbNotPng);
    }
    if !tiff.is_tiff() {
        return Err(UploadError::PointCloudNotTiff);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png() -> FileMeta {
        FileMeta::new("sample.png", "image/png", 2048)
    }

    #[test]
    fn missing_either_file_is_reported_first() {
        assert_eq!(validate(None, None), Err(UploadError::MissingInput));
        assert_eq!(validate(Some(&png()), None), Err(UploadError::MissingInput));
        let jpg = FileMeta::new("x.jpg", "image/jpeg", 1);
        assert_eq!(validate(Some(&jpg), None), Err(UploadError::MissingInput));
    }

    #[test]
    fn rgb_must_be_png_typed() {
        let named_png = FileMeta::new("looks.png", "image/jpeg", 1);
        let tiff = FileMeta::new("cloud.tiff", "image/tiff", 1);
        assert_eq!(validate(Some(&named_png), Some(&tiff)), Err(UploadError::RgbNotPng));
    }

    #[test]
    fn tiff_accepted_by_type_or_suffix() {
        let by_type = FileMeta::new("cloud.bin", "image/tiff", 1);
        let by_name = FileMeta::new("CLOUD.TIFF", "", 1);
        let short_suffix = FileMeta::new("cloud.tif", "application/octet-stream", 1);
        assert!(validate(Some(&png()), Some(&by_type)).is_ok());
        assert!(validate(Some(&png()), Some(&by_name)).is_ok());
        assert_eq!(
            validate(Some(&png()), Some(&short_suffix)),
            Err(UploadError::PointCloudNotTiff)
        );
    }

    #[test]
    fn size_label_uses_mebibytes() {
        assert_eq!(FileMeta::new("a", "", 1_310_720).size_label(), "1.25 MB");
        assert_eq!(FileMeta::new("a", "", 0).size_label(), "0.00 MB");
    }
}
