//! Physical sensor geometry inferred from focal-length metadata.
//!
//! Drone EXIF rarely states the sensor's physical size, but it does state
//! both the real focal length and the 35mm-equivalent one. Their ratio is
//! the crop factor, and dividing the full-frame reference diagonal (43.3 mm)
//! by it recovers the sensor diagonal; the pixel aspect ratio then splits
//! the diagonal into width and height. Pixel pitch follows directly.

use crate::error::{Error, Result};

/// Diagonal of a full-frame (36×24 mm) sensor, the 35mm-equivalent
/// reference, in millimetres.
pub const FULL_FRAME_DIAGONAL_MM: f64 = 43.3;

/// Millimetres per inch, for sensors specified by a physical diagonal.
const MM_PER_INCH: f64 = 25.4;

/// Camera sensor geometry: focal length, physical dimensions, and the
/// derived pixel pitch.
///
/// Invariant: `width_mm / height_mm == image_width_px / image_height_px`
/// (square pixels; the aspect ratio of the sensor is the aspect ratio of
/// the image).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorModel {
    /// Real (not 35mm-equivalent) focal length in millimetres.
    pub focal_length_mm: f64,
    /// Physical sensor width in millimetres.
    pub width_mm: f64,
    /// Physical sensor height in millimetres.
    pub height_mm: f64,
    /// Physical sensor diagonal in millimetres.
    pub diagonal_mm: f64,
    /// Image width in pixels.
    pub image_width_px: u32,
    /// Image height in pixels.
    pub image_height_px: u32,
    /// Pixel pitch in millimetres per pixel.
    pub pixel_size_mm: f64,
}

impl SensorModel {
    /// Derive the sensor geometry from focal-length metadata.
    ///
    /// `focal_35mm_equiv_mm / focal_mm` is the crop factor; the sensor
    /// diagonal is the full-frame diagonal divided by it.
    pub fn from_crop_factor(
        focal_mm: f64,
        focal_35mm_equiv_mm: f64,
        image_width_px: u32,
        image_height_px: u32,
    ) -> Result<Self> {
        if focal_mm <= 0.0 {
            return Err(Error::Domain("focal length must be positive"));
        }
        if focal_35mm_equiv_mm <= 0.0 {
            return Err(Error::Domain(
                "35mm-equivalent focal length must be positive",
            ));
        }
        if image_width_px == 0 || image_height_px == 0 {
            return Err(Error::Domain("image dimensions must be non-zero"));
        }

        let crop_factor = focal_35mm_equiv_mm / focal_mm;
        let diagonal_mm = FULL_FRAME_DIAGONAL_MM / crop_factor;
        let aspect = f64::from(image_width_px) / f64::from(image_height_px);
        let (width_mm, height_mm) = split_diagonal(diagonal_mm, aspect);

        Ok(Self {
            focal_length_mm: focal_mm,
            width_mm,
            height_mm,
            diagonal_mm,
            image_width_px,
            image_height_px,
            pixel_size_mm: width_mm / f64::from(image_width_px),
        })
    }

    /// Physical width and height in millimetres for a sensor specified by
    /// its diagonal in inches and an aspect ratio (e.g. 1/2.3", 4:3).
    pub fn dims_from_diagonal(
        diagonal_inches: f64,
        aspect_w: f64,
        aspect_h: f64,
    ) -> Result<(f64, f64)> {
        if diagonal_inches <= 0.0 {
            return Err(Error::Domain("sensor diagonal must be positive"));
        }
        if aspect_w <= 0.0 || aspect_h <= 0.0 {
            return Err(Error::Domain("aspect ratio components must be positive"));
        }
        Ok(split_diagonal(diagonal_inches * MM_PER_INCH, aspect_w / aspect_h))
    }
}

/// Split a diagonal into (width, height) for a given width/height aspect
/// ratio: height = d / sqrt(1 + a²), width = a · height.
fn split_diagonal(diagonal_mm: f64, aspect: f64) -> (f64, f64) {
    let height_mm = diagonal_mm / (1.0 + aspect * aspect).sqrt();
    (aspect * height_mm, height_mm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_factor_example() {
        // 24mm lens reported as 28mm-equivalent: crop factor 7/6.
        let sensor = SensorModel::from_crop_factor(24.0, 28.0, 4000, 3000).unwrap();

        let expected_diag = FULL_FRAME_DIAGONAL_MM * 24.0 / 28.0;
        assert!(
            (sensor.diagonal_mm - expected_diag).abs() < 1e-12,
            "diagonal: expected {:.6}, got {:.6}",
            expected_diag,
            sensor.diagonal_mm,
        );
        // 4:3 aspect makes the diagonal a 3-4-5 triangle.
        assert!((sensor.height_mm - expected_diag * 3.0 / 5.0).abs() < 1e-12);
        assert!((sensor.width_mm - expected_diag * 4.0 / 5.0).abs() < 1e-12);
        assert!(
            (sensor.pixel_size_mm - sensor.width_mm / 4000.0).abs() < 1e-15,
        );
    }

    #[test]
    fn test_aspect_ratio_preserved() {
        let cases = [
            (8.8, 24.0, 5472u32, 3648u32),
            (4.5, 24.0, 4000, 3000),
            (35.0, 35.0, 7952, 5304),
        ];
        for (focal, equiv, w, h) in cases {
            let sensor = SensorModel::from_crop_factor(focal, equiv, w, h).unwrap();
            let sensor_aspect = sensor.width_mm / sensor.height_mm;
            let pixel_aspect = f64::from(w) / f64::from(h);
            assert!(
                (sensor_aspect - pixel_aspect).abs() < 1e-12,
                "aspect not preserved for {}x{}: {} vs {}",
                w,
                h,
                sensor_aspect,
                pixel_aspect,
            );
        }
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(matches!(
            SensorModel::from_crop_factor(0.0, 28.0, 4000, 3000),
            Err(Error::Domain(_)),
        ));
        assert!(matches!(
            SensorModel::from_crop_factor(24.0, -1.0, 4000, 3000),
            Err(Error::Domain(_)),
        ));
        assert!(matches!(
            SensorModel::from_crop_factor(24.0, 28.0, 0, 3000),
            Err(Error::Domain(_)),
        ));
        assert!(matches!(
            SensorModel::from_crop_factor(24.0, 28.0, 4000, 0),
            Err(Error::Domain(_)),
        ));
    }

    #[test]
    fn test_dims_from_physical_diagonal() {
        // A 1-inch diagonal at 3:2 decomposes into a 3-4-5-like triangle
        // with the stated aspect ratio and the stated diagonal.
        let (w, h) = SensorModel::dims_from_diagonal(1.0, 3.0, 2.0).unwrap();
        let diag = (w * w + h * h).sqrt();
        assert!((diag - MM_PER_INCH).abs() < 1e-12);
        assert!((w / h - 1.5).abs() < 1e-12);

        assert!(matches!(
            SensorModel::dims_from_diagonal(-1.0, 4.0, 3.0),
            Err(Error::Domain(_)),
        ));
        assert!(matches!(
            SensorModel::dims_from_diagonal(1.0, 4.0, 0.0),
            Err(Error::Domain(_)),
        ));
    }
}
