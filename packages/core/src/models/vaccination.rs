use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Coordinates;
use crate::store::{Record, StoreError};

pub const SUM_MISMATCH_MESSAGE: &str =
    "sum of male+female and young+adult counts must equal total";

/// One vaccination-campaign field record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vaccination {
    #[serde(default)]
    pub id: u64,
    pub vaccinator_id: String,
    pub vaccinator_name: String,
    pub farm: String,
    pub municipality: String,
    pub region: String,
    pub campaign: String,
    pub campaign_status: String,
    pub vaccine_type: String,
    pub animals_vaccinated: u64,
    pub male_count: u64,
    pub female_count: u64,
    pub young_count: u64,
    pub adult_count: u64,
    #[serde(default)]
    pub observations: Option<String>,
    /// Filled with the insertion time when a new record arrives without one.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    pub coordinates: Coordinates,
}

impl Vaccination {
    /// `true` when both the sex split and the age split add up to the total.
    pub fn counts_are_consistent(&self) -> bool {
        let total = Some(self.animals_vaccinated);
        self.male_count.checked_add(self.female_count) == total
            && self.young_count.checked_add(self.adult_count) == total
    }
}

impl Record for Vaccination {
    const ENTITY: &'static str = "Vaccination record";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), StoreError> {
        if self.counts_are_consistent() {
            Ok(())
        } else {
            Err(StoreError::invalid_input(SUM_MISMATCH_MESSAGE))
        }
    }

    fn prepare_insert(&mut self) {
        if self.date_created.is_none() {
            self.date_created = Some(Utc::now());
        }
    }
}
