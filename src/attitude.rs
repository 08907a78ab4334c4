//! Camera attitude and its rotation matrix.
//!
//! The camera orientation is given by three Euler-style angles: omega about
//! X, phi about Y, kappa about Z, composed as **R = Rz(kappa) · Ry(phi) ·
//! Rx(omega)** (extrinsic Z-then-Y-then-X applied to a world vector).
//!
//! The composition order is a fixed convention of this crate and pairs with
//! the sign convention of the collinearity equations in
//! [`crate::projection`] — the two are not independently substitutable.
//! Textbooks disagree on both (some define kappa with the opposite sense,
//! some use the transposed matrix), so when adapting to a new platform the
//! full pipeline should be verified against a surveyed control point.

use nalgebra::{Rotation3, Vector3};

use crate::RotationMatrix;

/// Camera attitude angles in radians: omega about X, phi about Y, kappa
/// about Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attitude {
    /// Rotation about the X axis, radians.
    pub omega: f64,
    /// Rotation about the Y axis, radians.
    pub phi: f64,
    /// Rotation about the Z axis, radians.
    pub kappa: f64,
}

impl Attitude {
    /// Build an attitude from the pitch/roll/yaw degree values found in
    /// drone metadata, mapped onto (omega, phi, kappa).
    pub fn from_degrees(pitch_deg: f64, roll_deg: f64, yaw_deg: f64) -> Self {
        Self {
            omega: pitch_deg.to_radians(),
            phi: roll_deg.to_radians(),
            kappa: yaw_deg.to_radians(),
        }
    }

    /// The world-frame rotation matrix R = Rz(kappa) · Ry(phi) · Rx(omega).
    ///
    /// Each factor is the standard right-handed rotation about its axis, so
    /// `Attitude { 0, 0, 0 }` yields the identity.
    pub fn rotation_matrix(&self) -> RotationMatrix {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), self.omega);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), self.phi);
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), self.kappa);
        (rz * ry * rx).into_inner()
    }
}
