use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Coordinates;
use crate::store::{Record, StoreError};

/// Direction of a cross-border shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    Import,
    Export,
}

impl MovementType {
    /// Wire label, as used in bodies and query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Export => "export",
        }
    }
}

/// Origin and destination points of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteCoordinates {
    pub origin: Coordinates,
    pub destination: Coordinates,
}

/// One cross-border animal shipment.
///
/// `origin` is expected for exports and `destination` for imports, but
/// neither is enforced. `alert_reason` only carries meaning when
/// `has_alert` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    #[serde(default)]
    pub id: u64,
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    pub country: String,
    pub animal_count: u64,
    pub animal_type: String,
    pub purpose: String,
    pub health_status: String,
    pub document_number: String,
    pub date_of_movement: DateTime<Utc>,
    pub responsible: String,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub has_alert: bool,
    #[serde(default)]
    pub alert_reason: Option<String>,
    pub coordinates: RouteCoordinates,
}

pub const DUPLICATE_DOCUMENT_MESSAGE: &str = "document number already exists";

impl Record for Movement {
    const ENTITY: &'static str = "Movement";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    // Uniqueness is only checked on insert; replace keeps whatever number
    // the caller sends.
    fn check_insert(&self, existing: &[Self]) -> Result<(), StoreError> {
        if existing
            .iter()
            .any(|m| m.document_number == self.document_number)
        {
            return Err(StoreError::conflict(DUPLICATE_DOCUMENT_MESSAGE));
        }
        Ok(())
    }
}
