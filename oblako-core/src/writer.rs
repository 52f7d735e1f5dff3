//! Persists rendered clouds.

use std::path::Path;

use image::{ImageFormat, RgbImage};
use tracing::info;

use crate::error::{CloudError, Result};

/// Raster formats the writer can produce.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// Output format for a destination path, chosen from its extension.
pub fn image_format(path: &Path) -> Result<ImageFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "png" => Ok(ImageFormat::Png),
        "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
        "bmp" => Ok(ImageFormat::Bmp),
        _ => Err(CloudError::Write {
            path: path.to_path_buf(),
            reason: format!(
                "unsupported image extension {extension:?}; expected one of {}",
                SUPPORTED_EXTENSIONS.join(", ")
            ),
        }),
    }
}

pub fn write_image(image: &RgbImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let format = image_format(path)?;
    image
        .save_with_format(path, format)
        .map_err(|err| CloudError::Write {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        ?format,
        "word cloud written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn canvas() -> RgbImage {
        RgbImage::from_pixel(8, 4, Rgb([10, 20, 30]))
    }

    #[test]
    fn picks_format_from_extension() {
        assert_eq!(image_format(Path::new("a.PNG")).unwrap(), ImageFormat::Png);
        assert_eq!(image_format(Path::new("a.jpeg")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(image_format(Path::new("a.jpg")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(image_format(Path::new("a.bmp")).unwrap(), ImageFormat::Bmp);
    }

    #[test]
    fn unknown_extension_is_a_write_error() {
        let err = image_format(Path::new("cloud.svg")).unwrap_err();
        assert!(matches!(err, CloudError::Write { .. }));
        assert!(image_format(Path::new("cloud")).is_err());
    }

    #[test]
    fn writes_a_readable_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloud.png");
        write_image(&canvas(), &path).unwrap();

        let written = image::open(&path).unwrap().to_rgb8();
        assert_eq!(written.dimensions(), (8, 4));
        assert_eq!(*written.get_pixel(3, 2), Rgb([10, 20, 30]));
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("cloud.png");
        let err = write_image(&canvas(), &path).unwrap_err();
        assert!(matches!(err, CloudError::Write { .. }));
        assert!(!path.exists());
    }
}
