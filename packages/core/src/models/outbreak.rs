use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Coordinates;
use crate::store::Record;

/// Lifecycle stage of an outbreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutbreakStatus {
    Active,
    Controlled,
    Eradicated,
}

impl OutbreakStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Controlled => "controlled",
            Self::Eradicated => "eradicated",
        }
    }
}

/// Field severity, serialised with the Spanish labels used by the field teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "alta")]
    High,
    #[serde(rename = "media")]
    Medium,
    #[serde(rename = "baja")]
    Low,
}

/// One snapshot of an outbreak's case count. Entries are stored as sent;
/// `total_cases` is not reconciled against `new_cases`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub date: NaiveDate,
    pub new_cases: u64,
    pub total_cases: u64,
}

/// One disease outbreak with its progress log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outbreak {
    #[serde(default)]
    pub id: u64,
    pub disease_type: String,
    pub status: OutbreakStatus,
    pub severity: Severity,
    pub detection_date: DateTime<Utc>,
    pub region: String,
    pub municipality: String,
    pub affected_animals: u64,
    pub measures: String,
    pub responsible_technician: String,
    #[serde(default)]
    pub progress: Vec<ProgressEntry>,
    pub coordinates: Coordinates,
}

impl Record for Outbreak {
    const ENTITY: &'static str = "Outbreak";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}
