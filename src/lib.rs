//! # groundpix
//!
//! Direct georeferencing for aerial/drone photographs: given a photograph's
//! embedded orientation and position metadata, compute where an externally
//! known ground point lands on that photograph's pixel grid — the inverse
//! collinearity problem of photogrammetry.
//!
//! ## Features
//!
//! - **Metadata parsing** — unit-suffixed numbers, DMS-with-hemisphere
//!   angles, and free-text altitude strings into plain numbers
//! - **CRS projection** — WGS84 latitude/longitude to a planar
//!   easting/northing grid via [proj4rs](https://docs.rs/proj4rs)
//!   (the original survey workflow used GGRS87 / Greek Grid, EPSG:2100)
//! - **Sensor geometry** — physical sensor size and pixel pitch inferred
//!   from focal-length / 35mm-equivalent metadata
//! - **Collinearity projection** — omega/phi/kappa attitude to a rotation
//!   matrix, pinhole projection of the ground point, millimetres-to-pixels
//!   mapping
//! - **Typed failures** — degenerate geometry, parse and transform errors
//!   are explicit variants, never NaN or a silent default
//!
//! ## Example
//!
//! ```no_run
//! use groundpix::{
//!     dms_to_decimal, ground_to_pixel, Attitude, CameraPose, CrsTransform,
//!     GeodeticPoint, GroundPoint, SensorModel,
//! };
//!
//! # fn main() -> groundpix::Result<()> {
//! // Parse the camera position from its EXIF strings and project it into
//! // the planar grid shared with the surveyed ground point.
//! let transform = CrsTransform::wgs84_to_greek_grid()?;
//! let position = transform.project(GeodeticPoint {
//!     latitude_deg: dms_to_decimal("37 deg 58' 30.12\" N")?,
//!     longitude_deg: dms_to_decimal("23 deg 43' 12\" E")?,
//! })?;
//!
//! let pose = CameraPose {
//!     position,
//!     altitude_m: 500.0,
//!     attitude: Attitude::from_degrees(-1.2, 0.4, 87.3),
//! };
//! let sensor = SensorModel::from_crop_factor(24.0, 28.0, 4000, 3000)?;
//! let ground = GroundPoint {
//!     x_m: 480_250.0,
//!     y_m: 4_203_110.0,
//!     z_m: 182.5,
//! };
//!
//! let pixel = ground_to_pixel(&pose, &sensor, ground)?;
//! println!("row {:.1}, column {:.1}", pixel.row, pixel.column);
//! if !pixel.is_within_frame(4000, 3000) {
//!     println!("ground point is outside this photograph's footprint");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Scope
//!
//! The crate is the pure geometric core: no EXIF extraction, no DEM
//! sampling, no geocoding, no I/O. Everything operates on value types with
//! no shared state, so one photograph's pipeline can run per thread without
//! locks. Lens distortion and camera calibration are out of scope (the
//! principal point is assumed at the image center).

pub mod attitude;
pub mod crs;
pub mod error;
pub mod metadata;
pub mod pixel;
pub mod projection;
pub mod sensor;

pub use attitude::Attitude;
pub use crs::{
    azimuth_deg, orthometric_height_m, CrsTransform, GeodeticPoint, ProjectedPoint,
};
pub use error::{Error, Result};
pub use metadata::{
    dms_components_to_decimal, dms_to_decimal, dms_to_decimal_with, extract_first_float,
    strip_unit,
};
pub use pixel::PixelCoordinate;
pub use projection::{collinearity_project, ground_to_pixel, CameraPose, GroundPoint};
pub use sensor::{SensorModel, FULL_FRAME_DIAGONAL_MM};

/// 3×3 orthonormal world-to-camera rotation matrix.
pub type RotationMatrix = nalgebra::Matrix3<f64>;
