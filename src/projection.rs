//! Collinearity projection: a 3D ground point into a photograph.
//!
//! The pinhole collinearity equations relate a world point, the camera's
//! exposure station and orientation, and the focal length to an image-plane
//! position. With the relative vector rotated into the camera frame as
//! (r1, r2, r3):
//!
//! ```text
//! x = −f · r1 / r3        y = −f · r2 / r3
//! ```
//!
//! in millimetres from the optical axis. The negative sign encodes the
//! pinhole inversion and pairs with the rotation convention of
//! [`crate::attitude`].
//!
//! A ground point in the camera's focal plane (r3 ≈ 0) has no projection;
//! that case surfaces as [`Error::DegenerateGeometry`] instead of NaN.

use nalgebra::Vector3;
use tracing::debug;

use crate::attitude::Attitude;
use crate::crs::ProjectedPoint;
use crate::error::{Error, Result};
use crate::pixel::PixelCoordinate;
use crate::sensor::SensorModel;
use crate::RotationMatrix;

/// |r3| below this many metres counts as "in the focal plane".
const DEPTH_EPSILON_M: f64 = 1e-9;

/// A surveyed 3D point in the same projected CRS and vertical datum as the
/// camera position. Always supplied by the caller; the crate embeds no
/// default reference points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPoint {
    /// Easting in metres.
    pub x_m: f64,
    /// Northing in metres.
    pub y_m: f64,
    /// Height in metres, same vertical datum as the camera altitude.
    pub z_m: f64,
}

/// A photograph's exposure station: planar position, altitude, and attitude.
///
/// Built once per photograph from parsed metadata and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera position in the projected CRS.
    pub position: ProjectedPoint,
    /// Camera altitude in metres, same vertical datum as ground heights.
    pub altitude_m: f64,
    /// Camera attitude angles.
    pub attitude: Attitude,
}

/// Project a ground point into camera-plane millimetres.
///
/// `r` is the camera's rotation matrix (see [`Attitude::rotation_matrix`])
/// and `focal_mm` the real focal length.
pub fn collinearity_project(
    ground: GroundPoint,
    camera: &CameraPose,
    r: &RotationMatrix,
    focal_mm: f64,
) -> Result<(f64, f64)> {
    if focal_mm <= 0.0 {
        return Err(Error::Domain("focal length must be positive"));
    }

    let relative = Vector3::new(
        ground.x_m - camera.position.easting_m,
        ground.y_m - camera.position.northing_m,
        ground.z_m - camera.altitude_m,
    );
    let rotated = r * relative;
    let (r1, r2, r3) = (rotated.x, rotated.y, rotated.z);

    if r3.abs() < DEPTH_EPSILON_M {
        return Err(Error::DegenerateGeometry { denominator: r3 });
    }

    Ok((-focal_mm * r1 / r3, -focal_mm * r2 / r3))
}

/// The single-call pipeline: where does `ground` land on the photograph
/// described by `pose` and `sensor`?
///
/// The result may lie outside the image bounds (ground point not in the
/// photograph's footprint); check with
/// [`PixelCoordinate::is_within_frame`].
pub fn ground_to_pixel(
    pose: &CameraPose,
    sensor: &SensorModel,
    ground: GroundPoint,
) -> Result<PixelCoordinate> {
    let r = pose.attitude.rotation_matrix();
    let (x_mm, y_mm) = collinearity_project(ground, pose, &r, sensor.focal_length_mm)?;
    debug!(x_mm, y_mm, "collinearity projection");

    Ok(PixelCoordinate::from_camera_plane(
        x_mm,
        y_mm,
        sensor.pixel_size_mm,
        sensor.image_width_px,
        sensor.image_height_px,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Matrix3;

    fn level_pose(easting: f64, northing: f64, altitude: f64) -> CameraPose {
        CameraPose {
            position: ProjectedPoint {
                easting_m: easting,
                northing_m: northing,
            },
            altitude_m: altitude,
            attitude: Attitude {
                omega: 0.0,
                phi: 0.0,
                kappa: 0.0,
            },
        }
    }

    #[test]
    fn test_identity_attitude_projection() {
        // R = I: x = −f·ΔX/ΔZ, y = −f·ΔY/ΔZ directly.
        let camera = level_pose(1000.0, 2000.0, 500.0);
        let ground = GroundPoint {
            x_m: 1100.0,
            y_m: 2050.0,
            z_m: 100.0,
        };
        let (x, y) =
            collinearity_project(ground, &camera, &Matrix3::identity(), 24.0).unwrap();

        // ΔZ = −400: x = −24·100/−400 = 6, y = −24·50/−400 = 3.
        assert!((x - 6.0).abs() < 1e-12, "x: {}", x);
        assert!((y - 3.0).abs() < 1e-12, "y: {}", y);
    }

    #[test]
    fn test_point_on_optical_axis() {
        let camera = level_pose(1000.0, 2000.0, 500.0);
        let ground = GroundPoint {
            x_m: 1000.0,
            y_m: 2000.0,
            z_m: 0.0,
        };
        let (x, y) =
            collinearity_project(ground, &camera, &Matrix3::identity(), 24.0).unwrap();
        assert!(x.abs() < 1e-12 && y.abs() < 1e-12);
    }

    #[test]
    fn test_focal_plane_is_degenerate_not_nan() {
        // Same height as the camera with identity rotation: r3 = 0.
        let camera = level_pose(1000.0, 2000.0, 500.0);
        let ground = GroundPoint {
            x_m: 1100.0,
            y_m: 2000.0,
            z_m: 500.0,
        };
        let err =
            collinearity_project(ground, &camera, &Matrix3::identity(), 24.0).unwrap_err();
        assert!(
            matches!(err, Error::DegenerateGeometry { .. }),
            "expected DegenerateGeometry, got {:?}",
            err,
        );
    }

    #[test]
    fn test_rotation_feeds_projection() {
        // kappa = 90° swaps the roles of ΔX and ΔY (with a sign) before the
        // division, so the camera-plane axes trade places.
        let mut camera = level_pose(0.0, 0.0, 100.0);
        camera.attitude.kappa = std::f64::consts::FRAC_PI_2;
        let r = camera.attitude.rotation_matrix();

        let ground = GroundPoint {
            x_m: 10.0,
            y_m: 0.0,
            z_m: 0.0,
        };
        let (x, y) = collinearity_project(ground, &camera, &r, 24.0).unwrap();

        // Rz(90°)·(10,0,−100) = (0,10,−100): x = 0, y = −24·10/−100 = 2.4.
        assert!(x.abs() < 1e-12, "x: {}", x);
        assert!((y - 2.4).abs() < 1e-12, "y: {}", y);
    }

    #[test]
    fn test_ground_to_pixel_pipeline() {
        let pose = level_pose(1000.0, 2000.0, 500.0);
        let sensor = SensorModel::from_crop_factor(24.0, 28.0, 4000, 3000).unwrap();
        let ground = GroundPoint {
            x_m: 1001.0,
            y_m: 2000.0,
            z_m: 100.0,
        };

        let px = ground_to_pixel(&pose, &sensor, ground).unwrap();
        // x = −24·1/−400 = 0.06 mm; column = 0.06/pixel + 2000.
        let expected_column = 0.06 / sensor.pixel_size_mm + 2000.0;
        assert!(
            (px.column - expected_column).abs() < 1e-9,
            "column: expected {:.6}, got {:.6}",
            expected_column,
            px.column,
        );
        assert!((px.row - 1500.0).abs() < 1e-9, "row: {}", px.row);
        assert!(px.is_within_frame(4000, 3000));
    }
}
