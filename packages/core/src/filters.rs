//! Conjunctive equality filters over store contents.
//!
//! Each filter is also the query-string shape of its list endpoint. A
//! `None` field takes part in no predicate, and an empty value counts as
//! absent. Enum-valued fields are matched on their wire label, so an
//! unknown label matches nothing. Results keep store order.

use serde::Deserialize;

use crate::models::{Movement, Outbreak, OutbreakStatus, Vaccination};

pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;

    /// Records that satisfy every supplied predicate, in their original order.
    fn apply(&self, records: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

fn text_matches(expected: &Option<String>, actual: &str) -> bool {
    match expected.as_deref() {
        None | Some("") => true,
        Some(value) => value == actual,
    }
}

fn value_matches<V: PartialEq>(expected: &Option<V>, actual: &V) -> bool {
    expected.as_ref().map_or(true, |value| value == actual)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementFilter {
    #[serde(rename = "type")]
    pub movement_type: Option<String>,
    pub country: Option<String>,
    #[serde(alias = "has_alert")]
    pub has_alert: Option<bool>,
}

impl RecordFilter<Movement> for MovementFilter {
    fn matches(&self, movement: &Movement) -> bool {
        text_matches(&self.movement_type, movement.movement_type.as_str())
            && text_matches(&self.country, &movement.country)
            && value_matches(&self.has_alert, &movement.has_alert)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutbreakFilter {
    pub status: Option<String>,
    #[serde(alias = "disease_type")]
    pub disease_type: Option<String>,
    pub region: Option<String>,
}

impl OutbreakFilter {
    /// The fixed `status == active` view.
    pub fn active() -> Self {
        Self {
            status: Some(OutbreakStatus::Active.as_str().to_string()),
            ..Self::default()
        }
    }
}

impl RecordFilter<Outbreak> for OutbreakFilter {
    fn matches(&self, outbreak: &Outbreak) -> bool {
        text_matches(&self.status, outbreak.status.as_str())
            && text_matches(&self.disease_type, &outbreak.disease_type)
            && text_matches(&self.region, &outbreak.region)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationFilter {
    pub region: Option<String>,
    pub campaign: Option<String>,
    #[serde(alias = "vaccinator_id")]
    pub vaccinator_id: Option<String>,
}

impl RecordFilter<Vaccination> for VaccinationFilter {
    fn matches(&self, vaccination: &Vaccination) -> bool {
        text_matches(&self.region, &vaccination.region)
            && text_matches(&self.campaign, &vaccination.campaign)
            && text_matches(&self.vaccinator_id, &vaccination.vaccinator_id)
    }
}
