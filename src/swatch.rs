//! Solid-color swatch output

use crate::color::AverageColor;
use crate::{Error, Result};
use image::{ImageFormat, RgbaImage};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Side length of the rendered swatch in pixels.
pub const SWATCH_SIZE: u32 = 200;

/// A `SWATCH_SIZE` square filled with `color`.
pub fn render_swatch(color: AverageColor) -> RgbaImage {
    RgbaImage::from_pixel(SWATCH_SIZE, SWATCH_SIZE, color.to_rgba())
}

/// `<unix-seconds>.png` for the given instant. Times before the epoch map to `0.png`.
pub fn swatch_file_name(at: SystemTime) -> String {
    let secs = at.duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);
    format!("{}.png", secs)
}

/// Render `color` and write it as a PNG named after the current second into `dir`.
///
/// An existing file with the same name is overwritten.
pub fn save_swatch(dir: &Path, color: AverageColor) -> Result<PathBuf> {
    let path = dir.join(swatch_file_name(SystemTime::now()));
    if path.exists() {
        warn!("overwriting existing swatch {}", path.display());
    }

    render_swatch(color)
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|e| Error::Persist {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    info!("wrote {} swatch to {}", color.hex(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const COLOR: AverageColor = AverageColor { r: 20, g: 30, b: 10, a: 200 };

    #[test]
    fn swatch_is_uniform() {
        let img = render_swatch(COLOR);
        assert_eq!(img.dimensions(), (SWATCH_SIZE, SWATCH_SIZE));
        assert!(img.pixels().all(|p| p.0 == [20, 30, 10, 200]));
    }

    #[test]
    fn file_name_uses_unix_seconds() {
        let at = UNIX_EPOCH + Duration::from_millis(1_700_000_000_999);
        assert_eq!(swatch_file_name(at), "1700000000.png");
    }

    #[test]
    fn saved_swatch_decodes_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_swatch(dir.path(), COLOR).unwrap();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (200, 200));
        assert_eq!(decoded.get_pixel(199, 0).0, [20, 30, 10, 200]);
    }

    #[test]
    fn unwritable_destination_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does/not/exist");
        let err = save_swatch(&missing, COLOR).unwrap_err();
        assert!(matches!(err, Error::Persist { .. }));
    }
}
