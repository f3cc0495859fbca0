//! Entity schemas for the three record stores.
//!
//! Every entity is (de)serialised with camelCase field names, the wire
//! format the dashboards already consume.

pub mod movement;
pub mod outbreak;
pub mod vaccination;

use serde::{Deserialize, Serialize};

pub use movement::{Movement, MovementType, RouteCoordinates};
pub use outbreak::{Outbreak, OutbreakStatus, ProgressEntry, Severity};
pub use vaccination::{Vaccination, SUM_MISMATCH_MESSAGE};

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}
