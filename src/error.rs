//! Error types for the georeferencing pipeline.
//!
//! Every failure is a typed, catchable variant. In particular a ground point
//! lying in the camera's focal plane surfaces as [`Error::DegenerateGeometry`]
//! rather than a NaN that silently poisons downstream arithmetic, and parse
//! failures always carry the offending raw string.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All failure modes of the georeferencing pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed unit/DMS/numeric text from image metadata.
    #[error("cannot parse {what} from {input:?}")]
    Parse {
        /// What the parser was looking for (e.g. "DMS angle").
        what: &'static str,
        /// The raw metadata string that failed to parse.
        input: String,
    },

    /// Invalid geometric input (non-positive focal length, zero image
    /// dimension, non-positive aspect component).
    #[error("invalid geometry input: {0}")]
    Domain(&'static str),

    /// The collinearity denominator is near zero: the ground point lies in
    /// the camera's focal plane and its projection is undefined.
    #[error("ground point lies in the camera focal plane (denominator {denominator:.3e} m)")]
    DegenerateGeometry {
        /// The offending depth component r3, in metres.
        denominator: f64,
    },

    /// Coordinate reference system transform failure.
    #[error("coordinate transform failed: {0}")]
    Transform(#[from] proj4rs::errors::Error),
}

impl Error {
    pub(crate) fn parse(what: &'static str, input: &str) -> Self {
        Error::Parse {
            what,
            input: input.to_string(),
        }
    }
}
