//! Coordinate reference system handling.
//!
//! Camera GPS positions arrive as geodetic latitude/longitude (WGS84) while
//! the collinearity math runs in a planar easting/northing CRS, so the two
//! must be bridged exactly once per photograph. The transform itself is
//! delegated to [proj4rs](https://docs.rs/proj4rs), a pure-Rust port of
//! PROJ.4.
//!
//! # Axis ordering
//!
//! Geographic coordinates cross the proj4rs boundary as **(longitude,
//! latitude) in radians**. Latitude/longitude axis swaps are a classic source
//! of silent kilometre-scale errors in these conversions, so the ordering is
//! confined to this module and pinned by tests against known ground truth.

use proj4rs::proj::Proj;
use proj4rs::transform::transform;
use tracing::debug;

use crate::error::Result;

/// WGS84 geographic CRS (EPSG:4326).
const WGS84_PROJ: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// GGRS87 / Greek Grid (EPSG:2100): transverse Mercator on GRS80 with a
/// three-parameter datum shift to WGS84.
const GREEK_GRID_PROJ: &str = "+proj=tmerc +lat_0=0 +lon_0=24 +k=0.9996 \
     +x_0=500000 +y_0=0 +ellps=GRS80 +towgs84=-199.87,74.79,246.62 \
     +units=m +no_defs";

/// A latitude/longitude pair in a global geodetic datum, decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticPoint {
    /// Latitude in decimal degrees, north positive (−90..90).
    pub latitude_deg: f64,
    /// Longitude in decimal degrees, east positive (−180..180).
    pub longitude_deg: f64,
}

/// A planar easting/northing pair in a projected CRS, metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// Easting in metres.
    pub easting_m: f64,
    /// Northing in metres.
    pub northing_m: f64,
}

/// A fixed geodetic→projected coordinate transform, built once and reused
/// for every point of a photograph.
///
/// Pure math, no I/O, no caching: the same input always yields the same
/// output, and a `CrsTransform` may be shared freely across threads.
#[derive(Debug)]
pub struct CrsTransform {
    source: Proj,
    target: Proj,
}

impl CrsTransform {
    /// Build a transform from a geodetic source CRS to a projected target
    /// CRS, both given as proj strings.
    pub fn new(source_proj: &str, target_proj: &str) -> Result<Self> {
        let source = Proj::from_proj_string(source_proj)?;
        let target = Proj::from_proj_string(target_proj)?;
        Ok(Self { source, target })
    }

    /// The transform used by the original survey workflow: WGS84
    /// (EPSG:4326) to GGRS87 / Greek Grid (EPSG:2100).
    pub fn wgs84_to_greek_grid() -> Result<Self> {
        Self::new(WGS84_PROJ, GREEK_GRID_PROJ)
    }

    /// Project a geodetic point into the planar target CRS.
    pub fn project(&self, geodetic: GeodeticPoint) -> Result<ProjectedPoint> {
        // proj4rs wants geographic input as (longitude, latitude) radians.
        let mut point = (
            geodetic.longitude_deg.to_radians(),
            geodetic.latitude_deg.to_radians(),
            0.0,
        );
        transform(&self.source, &self.target, &mut point)?;
        let projected = ProjectedPoint {
            easting_m: point.0,
            northing_m: point.1,
        };
        debug!(
            lat = geodetic.latitude_deg,
            lon = geodetic.longitude_deg,
            easting = projected.easting_m,
            northing = projected.northing_m,
            "projected geodetic point"
        );
        Ok(projected)
    }

    /// Inverse transform: recover the geodetic point for a planar position.
    pub fn unproject(&self, projected: ProjectedPoint) -> Result<GeodeticPoint> {
        let mut point = (projected.easting_m, projected.northing_m, 0.0);
        transform(&self.target, &self.source, &mut point)?;
        Ok(GeodeticPoint {
            latitude_deg: point.1.to_degrees(),
            longitude_deg: point.0.to_degrees(),
        })
    }
}

/// Great-circle initial bearing from one geodetic point towards another,
/// in degrees clockwise from north, normalized to [0, 360).
pub fn azimuth_deg(from: GeodeticPoint, to: GeodeticPoint) -> f64 {
    let phi1 = from.latitude_deg.to_radians();
    let phi2 = to.latitude_deg.to_radians();
    let delta_lambda = (to.longitude_deg - from.longitude_deg).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();
    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// Height above mean sea level from an ellipsoidal height and the local
/// geoid undulation, both in metres.
pub fn orthometric_height_m(ellipsoidal_m: f64, geoid_m: f64) -> f64 {
    ellipsoidal_m - geoid_m
}
