//! Camera-plane millimetres to pixel indices.

/// A real-valued (sub-pixel) location on the image's pixel grid.
///
/// Values are deliberately **not clamped** to the image bounds: a coordinate
/// outside `[0, width) × [0, height)` means the ground point falls outside
/// this photograph's footprint, which is a legitimate, reportable answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelCoordinate {
    /// Row index (vertical, top-down), sub-pixel.
    pub row: f64,
    /// Column index (horizontal, left-right), sub-pixel.
    pub column: f64,
}

impl PixelCoordinate {
    /// Map camera-plane coordinates (millimetres from the optical axis,
    /// image center assumed at the principal point) to pixel indices.
    pub fn from_camera_plane(
        x_mm: f64,
        y_mm: f64,
        pixel_size_mm: f64,
        image_width_px: u32,
        image_height_px: u32,
    ) -> Self {
        Self {
            column: x_mm / pixel_size_mm + f64::from(image_width_px) / 2.0,
            row: y_mm / pixel_size_mm + f64::from(image_height_px) / 2.0,
        }
    }

    /// Whether this coordinate lands inside the image bounds. Out-of-frame
    /// is not an error; the caller decides what to do with it.
    pub fn is_within_frame(&self, image_width_px: u32, image_height_px: u32) -> bool {
        (0.0..f64::from(image_width_px)).contains(&self.column)
            && (0.0..f64::from(image_height_px)).contains(&self.row)
    }
}
